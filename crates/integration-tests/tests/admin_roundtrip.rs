//! Integration tests for the admin console.
//!
//! These tests require:
//! - A migrated `PostgreSQL` database (cafe-cli migrate)
//! - The storefront and admin running against the same database
//!
//! Entries are created with a unique name and deleted afterwards.

use cafe_catalog_integration_tests::{
    admin_base_url, between, changelist_id, storefront_base_url, storefront_entry,
};
use reqwest::{Client, StatusCode, redirect};
use uuid::Uuid;

/// Client that reports redirects instead of following them.
fn client() -> Client {
    Client::builder()
        .redirect(redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

async fn add_entry(client: &Client, name: &str, price: &str, quantity: &str, image: &str) {
    let resp = client
        .post(format!("{}/cafes/add", admin_base_url()))
        .form(&[
            ("name", name),
            ("price", price),
            ("quantity", quantity),
            ("image_reference", image),
        ])
        .send()
        .await
        .expect("Failed to submit add form");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()
            .get("location")
            .and_then(|v| v.to_str().ok()),
        Some("/cafes")
    );
}

async fn changelist(client: &Client) -> String {
    let resp = client
        .get(format!("{}/cafes", admin_base_url()))
        .send()
        .await
        .expect("Failed to get changelist");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.text().await.expect("Failed to read response")
}

async fn delete_entry(client: &Client, id: &str) {
    let resp = client
        .post(format!("{}/cafes/{id}/delete", admin_base_url()))
        .send()
        .await
        .expect("Failed to delete entry");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
#[ignore = "Requires running storefront and admin servers"]
async fn test_added_entry_appears_on_storefront_unchanged() {
    let client = client();
    let name = format!("Roundtrip {}", Uuid::new_v4());
    let image = "https://images.example.com/roundtrip.jpg";

    add_entry(&client, &name, "4.35", "12", image).await;

    let page = client
        .get(format!("{}/cafes", storefront_base_url()))
        .send()
        .await
        .expect("Failed to get catalog page")
        .text()
        .await
        .expect("Failed to read response");

    let entry = storefront_entry(&page, &name).expect("entry missing from storefront");
    assert_eq!(
        between(entry, "<p class=\"cafe-price\">", "</p>"),
        Some("4.35")
    );
    assert_eq!(
        between(entry, "<p class=\"cafe-quantity\">", "</p>"),
        Some("12")
    );
    assert!(entry.contains(&format!("src=\"{image}\"")));

    let id = changelist_id(&changelist(&client).await, &name).expect("entry missing from admin");
    delete_entry(&client, &id).await;
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_changelist_shows_three_columns() {
    let client = client();
    let name = format!("Columns {}", Uuid::new_v4());
    add_entry(&client, &name, "2", "5", "/static/columns.png").await;

    let page = changelist(&client).await;
    let id = changelist_id(&page, &name).expect("entry missing from admin");

    let row = between(&page, &format!("<tr data-id=\"{id}\">"), "</tr>")
        .expect("row markup missing");
    assert_eq!(row.matches("<td").count(), 3);
    assert!(row.contains(&name));
    assert!(!row.contains("columns.png"));

    for label in ["Name", "Price", "Quantity"] {
        assert!(page.contains(&format!(">{label}</th>")));
    }

    delete_entry(&client, &id).await;
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_invalid_entry_is_not_stored() {
    let client = client();
    let name = format!("Invalid {}", Uuid::new_v4());

    let resp = client
        .post(format!("{}/cafes/add", admin_base_url()))
        .form(&[
            ("name", name.as_str()),
            ("price", "free"),
            ("quantity", "1"),
            ("image_reference", "/i.png"),
        ])
        .send()
        .await
        .expect("Failed to submit add form");
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    assert!(changelist_id(&changelist(&client).await, &name).is_none());
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_change_and_delete_missing_entry() {
    let client = client();
    let resp = client
        .get(format!("{}/cafes/2147483647/change", admin_base_url()))
        .send()
        .await
        .expect("Failed to get change form");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Invalid input for a missing entry is still a 404, not a form re-render
    let resp = client
        .post(format!("{}/cafes/2147483647/change", admin_base_url()))
        .form(&[
            ("name", ""),
            ("price", "free"),
            ("quantity", "1"),
            ("image_reference", "/i.png"),
        ])
        .send()
        .await
        .expect("Failed to submit change form");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .post(format!("{}/cafes/2147483647/delete", admin_base_url()))
        .send()
        .await
        .expect("Failed to post delete");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
