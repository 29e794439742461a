//! Seed the catalog from a YAML file.
//!
//! The file is a list of entries:
//!
//! ```yaml
//! - name: Espresso
//!   price: 2.5
//!   quantity: 40
//!   image_reference: https://images.example.com/espresso.jpg
//! ```
//!
//! Every entry is validated before the database is touched.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use cafe_catalog_admin::db::{CoffeeItemRepository, RepositoryError};
use cafe_catalog_core::{CoffeeItemError, NewCoffeeItem};

use super::{CommandError, connect};

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0} validation errors found")]
    Invalid(usize),

    #[error(transparent)]
    Connect(#[from] CommandError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// One entry as written in the seed file.
#[derive(Debug, Deserialize)]
struct SeedEntry {
    name: String,
    price: f64,
    quantity: i32,
    image_reference: String,
}

/// Parse and validate seed file contents.
///
/// Returns the entries, or each failing entry's position (1-based) with its
/// problem.
fn parse(content: &str) -> Result<Vec<NewCoffeeItem>, ParseFailure> {
    let entries: Vec<SeedEntry> = serde_yaml::from_str(content).map_err(ParseFailure::Yaml)?;

    let mut items = Vec::with_capacity(entries.len());
    let mut invalid = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        match NewCoffeeItem::new(
            &entry.name,
            entry.price,
            entry.quantity,
            &entry.image_reference,
        ) {
            Ok(item) => items.push(item),
            Err(err) => invalid.push((index + 1, err)),
        }
    }

    if invalid.is_empty() {
        Ok(items)
    } else {
        Err(ParseFailure::Invalid(invalid))
    }
}

#[derive(Debug)]
enum ParseFailure {
    Yaml(serde_yaml::Error),
    Invalid(Vec<(usize, CoffeeItemError)>),
}

/// Seed catalog entries from a YAML file.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML file
/// * `clear_existing` - If true, delete every existing entry first
///
/// # Errors
///
/// Returns `SeedError` if the file cannot be read or parsed, an entry is
/// invalid, or a database operation fails. Clearing and inserting run in one
/// transaction, so a failure leaves the catalog untouched.
pub async fn catalog(file_path: &str, clear_existing: bool) -> Result<(), SeedError> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(SeedError::FileNotFound(file_path.to_owned()));
    }

    info!(path = %file_path, "Loading catalog entries from file");
    let content = tokio::fs::read_to_string(path).await?;

    let items = match parse(&content) {
        Ok(items) => items,
        Err(ParseFailure::Yaml(e)) => return Err(SeedError::Yaml(e)),
        Err(ParseFailure::Invalid(invalid)) => {
            error!("Seed file validation failed:");
            for (position, err) in &invalid {
                error!("  - entry {position}: {err}");
            }
            return Err(SeedError::Invalid(invalid.len()));
        }
    };
    info!(entries = items.len(), "Seed file validated");

    let pool = connect().await?;
    let outcome = CoffeeItemRepository::new(&pool)
        .seed(&items, clear_existing)
        .await?;

    if clear_existing {
        info!(removed = outcome.removed, "Cleared existing entries");
    }
    for item in &outcome.inserted {
        info!(id = %item.id, name = %item.name, "Inserted");
    }

    info!("Seeding complete! {} entries inserted", outcome.inserted.len());
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use cafe_catalog_core::CoffeeField;

    use super::*;

    #[test]
    fn test_parse_entries_in_file_order() {
        let yaml = r"
- name: Espresso
  price: 2.5
  quantity: 40
  image_reference: https://images.example.com/espresso.jpg
- name: '  Flat white  '
  price: 3
  quantity: 0
  image_reference: /static/flat-white.png
";
        let items = parse(yaml).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Espresso");
        assert_eq!(items[1].name, "Flat white");
        assert!((items[1].price - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_reports_invalid_positions() {
        let yaml = r"
- name: Espresso
  price: 2.5
  quantity: 40
  image_reference: /e.jpg
- name: ''
  price: 1
  quantity: 1
  image_reference: /blank.jpg
";
        match parse(yaml).unwrap_err() {
            ParseFailure::Invalid(invalid) => {
                assert_eq!(invalid.len(), 1);
                assert_eq!(invalid[0].0, 2);
                assert_eq!(invalid[0].1, CoffeeItemError::Required(CoffeeField::Name));
            }
            ParseFailure::Yaml(e) => panic!("unexpected yaml error: {e}"),
        }
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let yaml = "- name: Espresso\n  price: 2.5\n  quantity: 1\n";
        assert!(matches!(parse(yaml).unwrap_err(), ParseFailure::Yaml(_)));
    }

    #[test]
    fn test_parse_rejects_fractional_quantity() {
        let yaml = "- {name: Mocha, price: 4, quantity: 1.5, image_reference: /m.png}\n";
        assert!(matches!(parse(yaml).unwrap_err(), ParseFailure::Yaml(_)));
    }
}
