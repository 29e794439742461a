//! Catalog CRUD.
//!
//! Inputs are validated before they reach SQL; the column bounds in the
//! migration match `NAME_MAX_LEN` and `IMAGE_REFERENCE_MAX_LEN`.

use sqlx::{PgExecutor, PgPool};

use cafe_catalog_core::{CoffeeItem, CoffeeItemId, NewCoffeeItem};

use super::RepositoryError;

// =============================================================================
// Internal Row Types
// =============================================================================

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

// =============================================================================
// Repository
// =============================================================================

/// Repository for catalog entries.
pub struct CoffeeItemRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CoffeeItemRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every entry, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<CoffeeItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, CoffeeItemRow>(
            r"
            SELECT id, name, price, quantity, image_reference
            FROM cafe.coffee_item
            ORDER BY id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(CoffeeItem::from).collect())
    }

    /// Number of entries.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the count is negative.
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cafe.coffee_item")
            .fetch_one(self.pool)
            .await?;

        u64::try_from(count)
            .map_err(|_| RepositoryError::DataCorruption(format!("negative row count {count}")))
    }

    /// Get one entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CoffeeItemId) -> Result<Option<CoffeeItem>, RepositoryError> {
        let row = sqlx::query_as::<_, CoffeeItemRow>(
            r"
            SELECT id, name, price, quantity, image_reference
            FROM cafe.coffee_item
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(CoffeeItem::from))
    }

    /// Insert an entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &NewCoffeeItem) -> Result<CoffeeItem, RepositoryError> {
        insert(self.pool, input).await
    }

    /// Replace every editable field of an entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no entry has this ID.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: CoffeeItemId,
        input: &NewCoffeeItem,
    ) -> Result<CoffeeItem, RepositoryError> {
        let row = sqlx::query_as::<_, CoffeeItemRow>(
            r"
            UPDATE cafe.coffee_item
            SET name = $2, price = $3, quantity = $4, image_reference = $5
            WHERE id = $1
            RETURNING id, name, price, quantity, image_reference
            ",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.price)
        .bind(input.quantity)
        .bind(&input.image_reference)
        .fetch_optional(self.pool)
        .await?;

        row.map(CoffeeItem::from).ok_or(RepositoryError::NotFound)
    }

    /// Delete an entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no entry has this ID.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: CoffeeItemId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM cafe.coffee_item WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Insert a batch of entries in one transaction, optionally deleting
    /// every existing entry first.
    ///
    /// Either every statement commits or none does.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails; the
    /// table is left as it was.
    pub async fn seed(
        &self,
        inputs: &[NewCoffeeItem],
        clear_existing: bool,
    ) -> Result<SeedOutcome, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let removed = if clear_existing {
            sqlx::query("DELETE FROM cafe.coffee_item")
                .execute(&mut *tx)
                .await?
                .rows_affected()
        } else {
            0
        };

        let mut inserted = Vec::with_capacity(inputs.len());
        for input in inputs {
            inserted.push(insert(&mut *tx, input).await?);
        }

        tx.commit().await?;

        Ok(SeedOutcome { removed, inserted })
    }
}

/// Result of [`CoffeeItemRepository::seed`].
#[derive(Debug)]
pub struct SeedOutcome {
    /// Entries deleted before inserting.
    pub removed: u64,
    /// Inserted entries, in input order.
    pub inserted: Vec<CoffeeItem>,
}

async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    input: &NewCoffeeItem,
) -> Result<CoffeeItem, RepositoryError> {
    let row = sqlx::query_as::<_, CoffeeItemRow>(
        r"
        INSERT INTO cafe.coffee_item (name, price, quantity, image_reference)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, price, quantity, image_reference
        ",
    )
    .bind(&input.name)
    .bind(input.price)
    .bind(input.quantity)
    .bind(&input.image_reference)
    .fetch_one(executor)
    .await?;

    Ok(row.into())
}
