//! Notification dismissal

use axum::{Extension, Json};
use serde_json::Value;

use super::nav::session_json;
use crate::error::ApiResult;
use crate::session::SessionHandle;

/// POST /api/notification/dismiss
pub async fn dismiss_notification(Extension(handle): Extension<SessionHandle>) -> ApiResult<Json<Value>> {
    let mut session = handle.lock().await;
    session.dismiss_notification();
    session_json(&session)
}
