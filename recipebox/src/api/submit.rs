//! Submit screen: form edits and the submission flow
//!
//! The session lock is released while the store write is pending, so a
//! second submit from the same client sees the in-flight flag and is
//! rejected instead of writing a duplicate. Edits are refused until the
//! write settles.

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use recipebox_common::events::RecipeEvent;
use recipebox_common::notification::NotificationView;
use recipebox_common::submission::{write_recipe, RecipeForm, SubmitError};
use recipebox_common::{DocumentId, Session};

use crate::error::{ApiError, ApiResult};
use crate::session::SessionHandle;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct NameUpdate {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct RowEdit {
    pub index: usize,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    Created,
    Invalid,
    InProgress,
    StoreError,
}

impl SubmitOutcome {
    fn from_result(result: &Result<DocumentId, SubmitError>) -> Self {
        match result {
            Ok(_) => SubmitOutcome::Created,
            Err(SubmitError::Validation(_)) => SubmitOutcome::Invalid,
            Err(SubmitError::InProgress) => SubmitOutcome::InProgress,
            Err(SubmitError::Store(_)) => SubmitOutcome::StoreError,
        }
    }
}

/// GET /api/submit
pub async fn get_form(Extension(handle): Extension<SessionHandle>) -> Json<RecipeForm> {
    let session = handle.lock().await;
    Json(session.form().clone())
}

/// PUT /api/submit/name
pub async fn set_name(
    Extension(handle): Extension<SessionHandle>,
    Json(update): Json<NameUpdate>,
) -> ApiResult<Json<RecipeForm>> {
    let mut session = handle.lock().await;
    session.form_mut().set_name(update.value)?;
    Ok(Json(session.form().clone()))
}

/// PUT /api/submit/ingredients
pub async fn edit_ingredient(
    Extension(handle): Extension<SessionHandle>,
    Json(edit): Json<RowEdit>,
) -> ApiResult<Json<RecipeForm>> {
    let mut session = handle.lock().await;
    session.form_mut().edit_ingredient(edit.index, edit.value)?;
    Ok(Json(session.form().clone()))
}

/// PUT /api/submit/steps
pub async fn edit_step(
    Extension(handle): Extension<SessionHandle>,
    Json(edit): Json<RowEdit>,
) -> ApiResult<Json<RecipeForm>> {
    let mut session = handle.lock().await;
    session.form_mut().edit_step(edit.index, edit.value)?;
    Ok(Json(session.form().clone()))
}

/// POST /api/submit
///
/// Always answers 200: the outcome and the notification describe what
/// happened, and the form reflects the state after it.
///
/// The write and its bookkeeping run in their own task, so a client that
/// disconnects mid-write still leaves the form reset or restored.
pub async fn submit_recipe(
    State(state): State<AppState>,
    Extension(handle): Extension<SessionHandle>,
) -> ApiResult<Json<Value>> {
    let started = handle.lock().await.begin_submit();
    let recipe = match started {
        Ok(recipe) => recipe,
        Err(e) => {
            let outcome = SubmitOutcome::from_result(&Err(e));
            let session = handle.lock().await;
            return submit_response(&session, outcome, None);
        }
    };

    let write = tokio::spawn(async move {
        let written = write_recipe(state.store.as_ref(), &recipe).await;

        let mut session = handle.lock().await;
        let finished = session.finish_submit(written);
        let outcome = SubmitOutcome::from_result(&finished);

        let id = finished.ok();
        if let Some(id) = &id {
            let delivered = state
                .events
                .emit(RecipeEvent::recipe_created(id.clone(), recipe.name.clone()));
            info!("Session {} created recipe {} ({} listeners)", handle.id, id, delivered);
        }

        submit_response(&session, outcome, id)
    });

    write
        .await
        .map_err(|e| ApiError::Internal(format!("Submit task failed: {}", e)))?
}

#[derive(Serialize)]
struct SubmitResponse<'a> {
    outcome: SubmitOutcome,
    id: Option<DocumentId>,
    form: &'a RecipeForm,
    notification: NotificationView<'a>,
}

fn submit_response(session: &Session, outcome: SubmitOutcome, id: Option<DocumentId>) -> ApiResult<Json<Value>> {
    let response = SubmitResponse {
        outcome,
        id,
        form: session.form(),
        notification: session.notification().view(),
    };
    Ok(Json(serde_json::to_value(response)?))
}
