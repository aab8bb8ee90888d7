//! # RecipeBox Common Library
//!
//! Everything the recipe screens do, independent of how they are served:
//! - Document store abstraction with SQLite and in-memory backends
//! - Recipe record model and legacy field normalization
//! - Dynamic list editor and the submission flow
//! - Browse state machine, navigation shell, and notifications
//! - Per-client session state
//! - Configuration loading, events, and SSE helpers

pub mod browser;
pub mod config;
pub mod db;
pub mod error;
pub mod events;
pub mod list_editor;
pub mod navigation;
pub mod notification;
pub mod recipe;
pub mod session;
pub mod sse;
pub mod store;
pub mod submission;

pub use error::{Error, Result};
pub use recipe::{NewRecipe, Recipe, RECIPES_COLLECTION};
pub use session::Session;
pub use store::{DocumentId, DocumentStore, StoreError};
