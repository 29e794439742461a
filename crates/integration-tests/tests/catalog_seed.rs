//! Database tests for batch seeding.
//!
//! These tests require:
//! - A migrated `PostgreSQL` database (cafe-cli migrate)
//! - `DATABASE_URL` pointing at it
//!
//! Use a scratch database: a successful `--clear` seed empties the catalog.

use cafe_catalog_admin::db::{CoffeeItemRepository, RepositoryError, create_pool};
use cafe_catalog_core::{NAME_MAX_LEN, NewCoffeeItem};
use secrecy::SecretString;
use sqlx::PgPool;
use uuid::Uuid;

async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    create_pool(&SecretString::from(url))
        .await
        .expect("Failed to connect to database")
}

fn entry(name: &str) -> NewCoffeeItem {
    NewCoffeeItem::new(name, 3.5, 2, "/static/seed.png").expect("valid entry")
}

/// An entry that passes no validation and that the column rejects.
fn oversized_entry() -> NewCoffeeItem {
    NewCoffeeItem {
        name: "x".repeat(NAME_MAX_LEN + 1),
        price: 1.0,
        quantity: 1,
        image_reference: "/static/oversized.png".to_string(),
    }
}

#[tokio::test]
#[ignore = "Requires migrated database"]
async fn test_failed_clear_and_seed_keeps_existing_entries() {
    let pool = pool().await;
    let repo = CoffeeItemRepository::new(&pool);

    let existing = repo
        .create(&entry(&format!("Existing {}", Uuid::new_v4())))
        .await
        .expect("Failed to insert existing entry");
    let count_before = repo.count().await.expect("Failed to count");

    let batch = vec![
        entry(&format!("Batch {}", Uuid::new_v4())),
        oversized_entry(),
    ];
    let err = repo
        .seed(&batch, true)
        .await
        .expect_err("oversized name should fail the batch");
    assert!(matches!(err, RepositoryError::Database(_)));

    assert_eq!(repo.count().await.expect("Failed to count"), count_before);
    let still_there = repo.get(existing.id).await.expect("Failed to fetch");
    assert_eq!(still_there.as_ref(), Some(&existing));

    repo.delete(existing.id).await.expect("Failed to clean up");
}

#[tokio::test]
#[ignore = "Requires migrated database"]
async fn test_seed_without_clear_appends_in_order() {
    let pool = pool().await;
    let repo = CoffeeItemRepository::new(&pool);

    let names = [
        format!("First {}", Uuid::new_v4()),
        format!("Second {}", Uuid::new_v4()),
    ];
    let batch: Vec<_> = names.iter().map(|name| entry(name)).collect();

    let outcome = repo.seed(&batch, false).await.expect("Failed to seed");
    assert_eq!(outcome.removed, 0);

    let inserted: Vec<_> = outcome.inserted.iter().map(|item| item.name.as_str()).collect();
    let expected: Vec<_> = names.iter().map(String::as_str).collect();
    assert_eq!(inserted, expected);

    for item in &outcome.inserted {
        repo.delete(item.id).await.expect("Failed to clean up");
    }
}
