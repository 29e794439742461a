//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness
//! GET  /health/ready           - Readiness (database reachable)
//!
//! # Index
//! GET  /                       - Registered models with entry counts
//!
//! # Catalog
//! GET  /cafes                  - List view (name, price, quantity)
//! GET  /cafes/add              - Add form
//! POST /cafes/add              - Create entry
//! GET  /cafes/{id}/change      - Change form
//! POST /cafes/{id}/change      - Update entry
//! GET  /cafes/{id}/delete      - Delete confirmation
//! POST /cafes/{id}/delete      - Delete entry
//! ```

pub mod cafes;
pub mod dashboard;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all console routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/cafes", get(cafes::changelist))
        .route("/cafes/add", get(cafes::add_form).post(cafes::add))
        .route(
            "/cafes/{id}/change",
            get(cafes::change_form).post(cafes::change),
        )
        .route(
            "/cafes/{id}/delete",
            get(cafes::delete_confirm).post(cafes::delete),
        )
}
