//! Raw recipe listing (no session state involved)

use axum::{extract::State, Json};

use recipebox_common::browser::fetch_recipes;
use recipebox_common::Recipe;

use crate::error::ApiResult;
use crate::AppState;

/// GET /api/recipes
///
/// Every recipe, normalized, in insertion order.
pub async fn list_recipes(State(state): State<AppState>) -> ApiResult<Json<Vec<Recipe>>> {
    let recipes = fetch_recipes(state.store.as_ref()).await?;
    Ok(Json(recipes))
}
