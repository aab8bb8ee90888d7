//! Server-Sent Events (SSE) for recipe events

use crate::AppState;
use axum::{
    extract::State,
    response::sse::{Event, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;

/// GET /api/events
///
/// Streams `ConnectionStatus` once, then every `RecipeCreated` event.
pub async fn event_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    recipebox_common::sse::create_event_sse_stream(&state.events, "recipebox")
}
