//! Server-Sent Events (SSE) utilities

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::events::EventBus;

/// Interval between heartbeat comments
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(15);

/// SSE stream of [`crate::events::RecipeEvent`]s plus a connection heartbeat
///
/// The first event is always `ConnectionStatus: connected`. Events that a
/// slow client missed are skipped with a warning rather than closing the
/// stream.
pub fn create_event_sse_stream(
    bus: &EventBus,
    service_name: &'static str,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("New SSE client connected to {} events", service_name);
    let mut rx = bus.subscribe();

    let stream = async_stream::stream! {
        yield Ok(Event::default()
            .event("ConnectionStatus")
            .data("connected"));

        loop {
            match rx.recv().await {
                Ok(event) => {
                    match serde_json::to_string(&event) {
                        Ok(data) => {
                            debug!("SSE: Sending {}", event.event_type());
                            yield Ok(Event::default().event(event.event_type()).data(data));
                        }
                        Err(e) => warn!("SSE: Failed to serialize event: {}", e),
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("SSE: client lagged, skipped {} events", skipped);
                }
                Err(RecvError::Closed) => {
                    info!("SSE: {} event bus closed", service_name);
                    break;
                }
            }
        }
    };

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(HEARTBEAT_INTERVAL)
            .text("heartbeat"),
    )
}
