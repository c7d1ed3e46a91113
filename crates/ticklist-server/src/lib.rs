//! Ticklist Server — the HTTP surface over the checklist core.
//!
//! A thin axum layer: every route delegates to the store or the
//! time-logging service, and every core error is mapped to a JSON
//! error body with an appropriate status code. The single-page UI is
//! served from a static directory.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
