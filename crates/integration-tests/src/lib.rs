//! Integration tests for the cafe catalog.
//!
//! The tests talk HTTP to running servers and are `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! cargo run -p cafe-catalog-cli -- migrate
//! cargo run -p cafe-catalog-storefront &
//! cargo run -p cafe-catalog-admin &
//! cargo test -p cafe-catalog-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_BASE_URL` - default `http://localhost:3000`
//! - `ADMIN_BASE_URL` - default `http://localhost:3001`
//! - `DATABASE_URL` - scratch database for the seeding tests

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the admin console (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Text between `start` and the next `end` after it.
#[must_use]
pub fn between<'a>(haystack: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = haystack.find(start)? + start.len();
    let rest = haystack.get(from..)?;
    let to = rest.find(end)?;
    rest.get(..to)
}

/// The storefront `<li class="cafe">` block whose name is `name`.
#[must_use]
pub fn storefront_entry<'a>(page: &'a str, name: &str) -> Option<&'a str> {
    let marker = format!("<h2 class=\"cafe-name\">{name}</h2>");
    page.split("<li class=\"cafe\"")
        .skip(1)
        .find(|block| block.contains(&marker))
}

/// ID of the admin list view row whose first cell is `name`.
#[must_use]
pub fn changelist_id(page: &str, name: &str) -> Option<String> {
    let marker = format!(">{name}</a>");
    page.split("<tr data-id=\"")
        .skip(1)
        .find(|row| row.contains(&marker))
        .and_then(|row| row.split('"').next())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between() {
        assert_eq!(between("<p>3.5</p>", "<p>", "</p>"), Some("3.5"));
        assert_eq!(between("<p>3.5", "<p>", "</p>"), None);
    }

    #[test]
    fn test_changelist_id() {
        let page = r#"<tr data-id="4"><td><a href="/cafes/4/change">Mocha</a></td></tr>
<tr data-id="9"><td><a href="/cafes/9/change">Latte</a></td></tr>"#;
        assert_eq!(changelist_id(page, "Latte").as_deref(), Some("9"));
        assert_eq!(changelist_id(page, "Ristretto"), None);
    }

    #[test]
    fn test_storefront_entry() {
        let page = r#"<li class="cafe" data-cafe-id="1"><h2 class="cafe-name">Mocha</h2><p class="cafe-price">4</p></li>"#;
        let block = storefront_entry(page, "Mocha").unwrap_or_default();
        assert_eq!(between(block, "<p class=\"cafe-price\">", "</p>"), Some("4"));
    }
}
