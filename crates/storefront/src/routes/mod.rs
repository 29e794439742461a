//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Greeting
//! GET  /cafes                  - Catalog page (every entry)
//! GET  /health                 - Liveness
//! GET  /health/ready           - Readiness (database reachable)
//! GET  /static/*               - Stylesheet
//! ```

pub mod cafes;
pub mod home;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::greet))
        .route("/cafes", get(cafes::list_page))
}
