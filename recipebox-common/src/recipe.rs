//! Recipe record and its document representation
//!
//! A recipe is written as `{"name", "ingredients": [..], "steps": [..]}`.
//! Older documents may carry `ingredients`/`steps` as one comma-joined
//! string. Both shapes are read through [`FieldValue`] and normalized to a
//! plain sequence as soon as the document is loaded, so nothing past this
//! module ever sees the joined form.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::store::{DocumentId, StoredDocument};

/// Collection holding every recipe document
pub const RECIPES_COLLECTION: &str = "recipes";

/// A validated recipe that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl NewRecipe {
    /// Document body written to the store
    pub fn to_document(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Stored shape of a list field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    List(Vec<String>),
    /// Legacy comma-joined form
    Joined(String),
}

impl FieldValue {
    /// Interpret a raw document field; `None` for absent or unusable values
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(FieldValue::Joined(s.clone())),
            Value::Array(items) => Some(FieldValue::List(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Null | Value::Array(_) | Value::Object(_) => None,
                        other => Some(other.to_string()),
                    })
                    .collect(),
            )),
            _ => None,
        }
    }

    /// Collapse to a single sequence representation
    ///
    /// Joined strings are split on `,` with each part trimmed. An empty or
    /// whitespace-only joined string yields an empty sequence.
    pub fn normalize(self) -> Vec<String> {
        match self {
            FieldValue::List(items) => items,
            FieldValue::Joined(joined) => {
                if joined.trim().is_empty() {
                    Vec::new()
                } else {
                    joined.split(',').map(|part| part.trim().to_string()).collect()
                }
            }
        }
    }
}

/// A persisted recipe, normalized for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub id: DocumentId,
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl Recipe {
    /// Build a recipe from a stored document
    ///
    /// The store enforces no schema, so this never fails: a missing name
    /// reads as `""` and a missing or unusable list reads as empty.
    pub fn from_document(doc: StoredDocument) -> Self {
        let StoredDocument { id, body } = doc;

        let name = body
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let ingredients = read_list_field(&id, &body, "ingredients");
        let steps = read_list_field(&id, &body, "steps");

        Self {
            id,
            name,
            ingredients,
            steps,
        }
    }
}

fn read_list_field(id: &DocumentId, body: &Value, field: &str) -> Vec<String> {
    match body.get(field).and_then(FieldValue::from_value) {
        Some(value) => value.normalize(),
        None => {
            debug!("Recipe {} has no usable '{}' field", id, field);
            Vec::new()
        }
    }
}
