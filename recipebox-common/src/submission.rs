//! Recipe submission flow
//!
//! The form holds the name field and two [`DynamicList`]s. Submitting
//! sanitizes both lists, validates the result, and writes one document.
//!
//! The write is split into [`RecipeForm::begin_submit`] and
//! [`RecipeForm::finish_submit`] so a caller can release its lock on the
//! form while the store call is pending. A submit started while another is
//! in flight is rejected with [`SubmitError::InProgress`].

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::list_editor::{is_blank, DynamicList};
use crate::notification::Notification;
use crate::recipe::{NewRecipe, RECIPES_COLLECTION};
use crate::store::{DocumentId, DocumentStore, StoreError};
use crate::Result;

pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields.";
pub const IN_PROGRESS_MESSAGE: &str = "A submission is already in progress.";
pub const STORE_FAILURE_MESSAGE: &str = "Failed to submit the recipe. Please try again.";
pub const SUCCESS_MESSAGE: &str = "Recipe submitted successfully!";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("recipe name is blank")]
    BlankName,
    #[error("no ingredients given")]
    NoIngredients,
    #[error("no steps given")]
    NoSteps,
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Submission already in progress")]
    InProgress,

    #[error("Store write failed: {0}")]
    Store(#[from] StoreError),
}

impl SubmitError {
    /// User-facing notification for this failure
    pub fn notification(&self) -> Notification {
        match self {
            SubmitError::Validation(_) => Notification::error(VALIDATION_MESSAGE),
            SubmitError::InProgress => Notification::warning(IN_PROGRESS_MESSAGE),
            SubmitError::Store(_) => Notification::error(STORE_FAILURE_MESSAGE),
        }
    }
}

/// Notification for the outcome of a submission
pub fn submission_notification(outcome: &std::result::Result<DocumentId, SubmitError>) -> Notification {
    match outcome {
        Ok(_) => Notification::success(SUCCESS_MESSAGE),
        Err(e) => e.notification(),
    }
}

/// Submit screen state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipeForm {
    name: String,
    ingredients: DynamicList,
    steps: DynamicList,
    submitting: bool,
}

impl RecipeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &DynamicList {
        &self.ingredients
    }

    pub fn steps(&self) -> &DynamicList {
        &self.steps
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.ensure_editable()?;
        self.name = name.into();
        Ok(())
    }

    pub fn edit_ingredient(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.ensure_editable()?;
        self.ingredients.edit(index, value)
    }

    pub fn edit_step(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.ensure_editable()?;
        self.steps.edit(index, value)
    }

    /// Fields are frozen while a write holds their snapshot
    fn ensure_editable(&self) -> Result<()> {
        if self.submitting {
            return Err(crate::Error::InvalidInput(
                "form cannot be edited while a submission is in progress".to_string(),
            ));
        }
        Ok(())
    }

    /// Sanitize both lists and check the required fields
    pub fn validate(&self) -> std::result::Result<NewRecipe, ValidationError> {
        if is_blank(&self.name) {
            return Err(ValidationError::BlankName);
        }

        let ingredients = self.ingredients.sanitized();
        if ingredients.is_empty() {
            return Err(ValidationError::NoIngredients);
        }

        let steps = self.steps.sanitized();
        if steps.is_empty() {
            return Err(ValidationError::NoSteps);
        }

        Ok(NewRecipe {
            name: self.name.clone(),
            ingredients,
            steps,
        })
    }

    /// Validate and mark the form as submitting
    ///
    /// On error the form is left exactly as it was.
    pub fn begin_submit(&mut self) -> std::result::Result<NewRecipe, SubmitError> {
        if self.submitting {
            warn!("Rejected submit: a submission is already in flight");
            return Err(SubmitError::InProgress);
        }

        let recipe = self.validate().map_err(|e| {
            info!("Rejected submit: {}", e);
            SubmitError::Validation(e)
        })?;

        self.submitting = true;
        Ok(recipe)
    }

    /// Record the outcome of the write started by [`Self::begin_submit`]
    ///
    /// Success resets the form; failure keeps every field for a retry.
    pub fn finish_submit(
        &mut self,
        outcome: std::result::Result<DocumentId, StoreError>,
    ) -> std::result::Result<DocumentId, SubmitError> {
        self.submitting = false;

        match outcome {
            Ok(id) => {
                info!("Recipe added with ID: {}", id);
                self.reset();
                Ok(id)
            }
            Err(e) => {
                error!("Error adding recipe: {}", e);
                Err(SubmitError::Store(e))
            }
        }
    }

    /// Run the whole flow against `store` while holding the form
    pub async fn submit(&mut self, store: &dyn DocumentStore) -> std::result::Result<DocumentId, SubmitError> {
        let recipe = self.begin_submit()?;
        let outcome = write_recipe(store, &recipe).await;
        self.finish_submit(outcome)
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.ingredients.reset();
        self.steps.reset();
        self.submitting = false;
    }
}

/// Single create call for a validated recipe
pub async fn write_recipe(store: &dyn DocumentStore, recipe: &NewRecipe) -> std::result::Result<DocumentId, StoreError> {
    let body = recipe.to_document()?;
    store.add_document(RECIPES_COLLECTION, body).await
}
