//! HTTP API handlers for recipebox

pub mod browse;
pub mod buildinfo;
pub mod health;
pub mod nav;
pub mod notification;
pub mod recipes;
pub mod sse;
pub mod submit;
pub mod ui;

pub use browse::{back_to_listing, get_browse, select_recipe};
pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use nav::{get_session, navigate};
pub use notification::dismiss_notification;
pub use recipes::list_recipes;
pub use sse::event_stream;
pub use submit::{edit_ingredient, edit_step, get_form, set_name, submit_recipe};
pub use ui::{serve_app_js, serve_index};
