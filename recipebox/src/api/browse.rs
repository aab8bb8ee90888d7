//! Browse screen: listing and read-only detail

use axum::{extract::Path, Extension, Json};

use recipebox_common::browser::BrowseScreen;
use recipebox_common::DocumentId;

use crate::error::ApiResult;
use crate::session::SessionHandle;

/// GET /api/browse
///
/// Current browse state without fetching; use `POST /api/nav/browse` to
/// refresh.
pub async fn get_browse(Extension(handle): Extension<SessionHandle>) -> Json<BrowseScreen> {
    let session = handle.lock().await;
    Json(session.browser().screen())
}

/// POST /api/browse/select/:id
pub async fn select_recipe(
    Extension(handle): Extension<SessionHandle>,
    Path(id): Path<String>,
) -> ApiResult<Json<BrowseScreen>> {
    let mut session = handle.lock().await;
    session.browser_mut().select(&DocumentId::from(id))?;
    Ok(Json(session.browser().screen()))
}

/// POST /api/browse/back
pub async fn back_to_listing(Extension(handle): Extension<SessionHandle>) -> Json<BrowseScreen> {
    let mut session = handle.lock().await;
    session.browser_mut().back();
    Json(session.browser().screen())
}
