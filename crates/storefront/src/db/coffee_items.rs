//! Catalog reads.

use sqlx::PgPool;

use cafe_catalog_core::{CoffeeItem, CoffeeItemId};

use super::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct CoffeeItemRow {
    id: CoffeeItemId,
    name: String,
    price: f64,
    quantity: i32,
    image_reference: String,
}

impl From<CoffeeItemRow> for CoffeeItem {
    fn from(row: CoffeeItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            quantity: row.quantity,
            image_reference: row.image_reference,
        }
    }
}

/// Read access to the catalog table.
pub struct CoffeeItemRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CoffeeItemRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every catalog entry in storage order. No filtering.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<CoffeeItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, CoffeeItemRow>(
            r"
            SELECT id, name, price, quantity, image_reference
            FROM cafe.coffee_item
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(CoffeeItem::from).collect())
    }
}
