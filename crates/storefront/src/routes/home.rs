//! Greeting handler.

use axum::response::Html;

/// Body served at `/`.
pub const GREETING: &str = "<h1> hola cafe</h1>";

/// Fixed greeting. Takes no input and never fails.
pub async fn greet() -> Html<&'static str> {
    Html(GREETING)
}
