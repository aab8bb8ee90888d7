//! Session view and tab navigation
//!
//! Activating the browse tab is the focus event that re-fetches recipes.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::Value;
use tracing::debug;

use recipebox_common::navigation::Tab;
use recipebox_common::Session;

use crate::error::ApiResult;
use crate::session::SessionHandle;
use crate::AppState;

/// Whole session view as JSON
pub(crate) fn session_json(session: &Session) -> ApiResult<Json<Value>> {
    Ok(Json(serde_json::to_value(session.view())?))
}

/// GET /api/session
pub async fn get_session(Extension(handle): Extension<SessionHandle>) -> ApiResult<Json<Value>> {
    let session = handle.lock().await;
    session_json(&session)
}

/// POST /api/nav/:tab
///
/// Returns the whole session view so the UI can redraw the active screen
/// and any notification raised by the focus event.
pub async fn navigate(
    State(state): State<AppState>,
    Extension(handle): Extension<SessionHandle>,
    Path(tab): Path<String>,
) -> ApiResult<Json<Value>> {
    let tab: Tab = tab.parse()?;
    debug!("Session {} navigating to {}", handle.id, tab);

    let mut session = handle.lock().await;
    session.navigate(tab, state.store.as_ref()).await;
    session_json(&session)
}
