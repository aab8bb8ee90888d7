//! Recipe browser state machine
//!
//! Two states: `Listing` and `Detail`. A focus event re-fetches every recipe
//! and returns to `Listing`; selecting and going back never touch the store.

use serde::Serialize;
use tracing::{debug, warn};

use crate::recipe::{Recipe, RECIPES_COLLECTION};
use crate::store::{DocumentId, DocumentStore, StoreError};
use crate::{Error, Result};

pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load recipes. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BrowserView {
    #[default]
    Listing,
    Detail(Recipe),
}

/// Browse screen state
#[derive(Debug, Clone, Default)]
pub struct RecipeBrowser {
    recipes: Vec<Recipe>,
    view: BrowserView,
}

impl RecipeBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn view(&self) -> &BrowserView {
        &self.view
    }

    /// Focus event: fetch every recipe and replace the list
    ///
    /// On failure the previous list is kept and the error is returned for
    /// the caller to surface. Either way the browser ends up in `Listing`.
    pub async fn on_focus(&mut self, store: &dyn DocumentStore) -> std::result::Result<usize, StoreError> {
        let fetched = fetch_recipes(store).await;
        self.apply_refresh(fetched)
    }

    /// Apply the result of a fetch started by a focus event
    pub fn apply_refresh(
        &mut self,
        fetched: std::result::Result<Vec<Recipe>, StoreError>,
    ) -> std::result::Result<usize, StoreError> {
        self.view = BrowserView::Listing;

        match fetched {
            Ok(recipes) => {
                debug!("Browser refreshed with {} recipes", recipes.len());
                self.recipes = recipes;
                Ok(self.recipes.len())
            }
            Err(e) => {
                warn!("Failed to fetch recipes, keeping {} stale entries: {}", self.recipes.len(), e);
                Err(e)
            }
        }
    }

    /// `Listing` → `Detail`
    pub fn select(&mut self, id: &DocumentId) -> Result<()> {
        if let BrowserView::Detail(current) = &self.view {
            return Err(Error::InvalidInput(format!(
                "already viewing recipe {}; go back first",
                current.id
            )));
        }

        let recipe = self
            .recipes
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("recipe {}", id)))?;

        self.view = BrowserView::Detail(recipe);
        Ok(())
    }

    /// `Detail` → `Listing`; no-op while already listing
    pub fn back(&mut self) {
        self.view = BrowserView::Listing;
    }

    /// Rendered form of the current state
    pub fn screen(&self) -> BrowseScreen {
        match &self.view {
            BrowserView::Listing => BrowseScreen::Listing {
                recipes: self
                    .recipes
                    .iter()
                    .map(|r| RecipeSummary {
                        id: r.id.clone(),
                        name: r.name.clone(),
                    })
                    .collect(),
            },
            BrowserView::Detail(recipe) => BrowseScreen::Detail {
                recipe: RecipeDetail::from(recipe),
            },
        }
    }
}

/// Read every recipe document, normalized
pub async fn fetch_recipes(store: &dyn DocumentStore) -> std::result::Result<Vec<Recipe>, StoreError> {
    let docs = store.list_documents(RECIPES_COLLECTION).await?;
    Ok(docs.into_iter().map(Recipe::from_document).collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BrowseScreen {
    Listing { recipes: Vec<RecipeSummary> },
    Detail { recipe: RecipeDetail },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSummary {
    pub id: DocumentId,
    pub name: String,
}

/// Read-only detail view with numbered lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    pub id: DocumentId,
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl From<&Recipe> for RecipeDetail {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            ingredients: numbered(&recipe.ingredients),
            steps: numbered(&recipe.steps),
        }
    }
}

/// `["Salt", "Oil"]` → `["1. Salt", "2. Oil"]`
pub fn numbered(items: &[String]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryDocumentStore;
    use serde_json::json;

    async fn seeded_store() -> InMemoryDocumentStore {
        let store = InMemoryDocumentStore::new();
        store
            .add_document(RECIPES_COLLECTION, json!({"name": "Soup", "ingredients": ["Water"], "steps": ["Boil"]}))
            .await
            .unwrap();
        store
            .add_document(
                RECIPES_COLLECTION,
                json!({"name": "Dressing", "ingredients": "Salt, Pepper, Oil", "steps": "Mix"}),
            )
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_focus_loads_listing() {
        let store = seeded_store().await;
        let mut browser = RecipeBrowser::new();

        assert_eq!(browser.on_focus(&store).await.unwrap(), 2);
        assert_eq!(browser.view(), &BrowserView::Listing);

        match browser.screen() {
            BrowseScreen::Listing { recipes } => {
                let names: Vec<_> = recipes.iter().map(|r| r.name.as_str()).collect();
                assert_eq!(names, vec!["Soup", "Dressing"]);
            }
            other => panic!("expected listing, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_legacy_detail_renders_numbered() {
        let store = seeded_store().await;
        let mut browser = RecipeBrowser::new();
        browser.on_focus(&store).await.unwrap();

        let id = browser.recipes()[1].id.clone();
        browser.select(&id).unwrap();

        match browser.screen() {
            BrowseScreen::Detail { recipe } => {
                assert_eq!(recipe.name, "Dressing");
                assert_eq!(recipe.ingredients, vec!["1. Salt", "2. Pepper", "3. Oil"]);
                assert_eq!(recipe.steps, vec!["1. Mix"]);
            }
            other => panic!("expected detail, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_select_and_back_make_no_store_calls() {
        let store = seeded_store().await;
        let mut browser = RecipeBrowser::new();
        browser.on_focus(&store).await.unwrap();
        let reads = store.read_calls();

        let id = browser.recipes()[0].id.clone();
        browser.select(&id).unwrap();
        browser.back();

        assert_eq!(store.read_calls(), reads);
        assert_eq!(browser.view(), &BrowserView::Listing);
    }

    #[tokio::test]
    async fn test_back_shows_stale_list_until_next_focus() {
        let store = seeded_store().await;
        let mut browser = RecipeBrowser::new();
        browser.on_focus(&store).await.unwrap();

        let id = browser.recipes()[0].id.clone();
        browser.select(&id).unwrap();
        store
            .add_document(RECIPES_COLLECTION, json!({"name": "Bread", "ingredients": ["Flour"], "steps": ["Bake"]}))
            .await
            .unwrap();

        browser.back();
        assert_eq!(browser.recipes().len(), 2);

        // Re-focus after a detail view replaces the list
        browser.select(&id).unwrap();
        assert_eq!(browser.on_focus(&store).await.unwrap(), 3);
        assert_eq!(browser.view(), &BrowserView::Listing);
    }

    #[tokio::test]
    async fn test_failed_focus_keeps_stale_list() {
        let store = seeded_store().await;
        let mut browser = RecipeBrowser::new();
        browser.on_focus(&store).await.unwrap();

        store.set_fail_reads(true);
        assert!(browser.on_focus(&store).await.is_err());
        assert_eq!(browser.recipes().len(), 2);
    }

    #[test]
    fn test_select_unknown_id() {
        let mut browser = RecipeBrowser::new();
        let result = browser.select(&DocumentId::from("missing"));
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert_eq!(browser.view(), &BrowserView::Listing);
    }

    #[test]
    fn test_screen_serialization_tag() {
        let browser = RecipeBrowser::new();
        let json = serde_json::to_value(browser.screen()).unwrap();
        assert_eq!(json["state"], "listing");
        assert!(json["recipes"].as_array().unwrap().is_empty());
    }
}
