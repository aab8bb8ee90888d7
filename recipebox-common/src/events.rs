//! Application events
//!
//! Broadcast to every SSE subscriber so open browse screens can offer a
//! refresh when someone else adds a recipe.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::store::DocumentId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RecipeEvent {
    /// A recipe document was written
    RecipeCreated {
        id: DocumentId,
        name: String,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
}

impl RecipeEvent {
    pub fn recipe_created(id: DocumentId, name: String) -> Self {
        RecipeEvent::RecipeCreated {
            id,
            name,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            RecipeEvent::RecipeCreated { .. } => "RecipeCreated",
        }
    }
}

/// Fan-out channel for [`RecipeEvent`]s
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<RecipeEvent>,
}

impl EventBus {
    /// `capacity` events are buffered per subscriber before the oldest drop
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Receive every event emitted after this call
    pub fn subscribe(&self) -> broadcast::Receiver<RecipeEvent> {
        self.tx.subscribe()
    }

    /// Emit to all current subscribers, returning how many received it
    ///
    /// Having no subscribers is not an error.
    pub fn emit(&self, event: RecipeEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
