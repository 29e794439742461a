//! Print every catalog entry.

use cafe_catalog_admin::db::{CoffeeItemRepository, RepositoryError};
use thiserror::Error;

use super::{CommandError, connect};

#[derive(Debug, Error)]
pub enum ListError {
    #[error(transparent)]
    Connect(#[from] CommandError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Log each entry, newest first.
///
/// # Errors
///
/// Returns `ListError` if the connection or query fails.
pub async fn run() -> Result<(), ListError> {
    let pool = connect().await?;
    let items = CoffeeItemRepository::new(&pool).list_all().await?;

    tracing::info!("{} catalog entries", items.len());
    for item in &items {
        tracing::info!(
            "  #{} {} | price {} | quantity {} | {}",
            item.id,
            item.name,
            item.price,
            item.quantity,
            item.image_reference
        );
    }

    Ok(())
}
