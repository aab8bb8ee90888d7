//! recipebox library - recipe browsing and submission web app
//!
//! Screen state lives server-side in per-client sessions; the static UI
//! only renders what the JSON API returns.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use recipebox_common::events::EventBus;
use recipebox_common::DocumentStore;

pub mod api;
pub mod error;
pub mod session;

pub use session::SessionRegistry;

/// Buffered events per SSE subscriber
const EVENT_BUS_CAPACITY: usize = 100;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Backing document store
    pub store: Arc<dyn DocumentStore>,
    /// Per-client screen state
    pub sessions: SessionRegistry,
    /// Broadcast of recipe events for SSE clients
    pub events: EventBus,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            sessions: SessionRegistry::new(),
            events: EventBus::new(EVENT_BUS_CAPACITY),
        }
    }
}

/// Build application router
///
/// Screen routes run behind the session middleware; the static UI, health,
/// build info, events and the raw recipe listing do not need a session.
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::{get, post, put};

    let screens = Router::new()
        .route("/api/session", get(api::get_session))
        .route("/api/nav/:tab", post(api::navigate))
        .route("/api/browse", get(api::get_browse))
        .route("/api/browse/select/:id", post(api::select_recipe))
        .route("/api/browse/back", post(api::back_to_listing))
        .route("/api/submit", get(api::get_form).post(api::submit_recipe))
        .route("/api/submit/name", put(api::set_name))
        .route("/api/submit/ingredients", put(api::edit_ingredient))
        .route("/api/submit/steps", put(api::edit_step))
        .route("/api/notification/dismiss", post(api::dismiss_notification))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session::session_middleware,
        ));

    let public = Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/api/buildinfo", get(api::get_build_info))
        .route("/api/events", get(api::event_stream))
        .route("/api/recipes", get(api::list_recipes))
        .merge(api::health_routes());

    Router::new()
        .merge(screens)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
