//! Database migration command.
//!
//! Migrations live in the workspace `migrations/` directory and are embedded
//! into the binary at compile time.
//!
//! ```bash
//! cafe-cli migrate
//! ```

use thiserror::Error;

use super::{CommandError, connect};

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    Connect(#[from] CommandError),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run every pending migration.
///
/// # Errors
///
/// Returns `MigrationError` if the connection or a migration fails.
pub async fn run() -> Result<(), MigrationError> {
    let pool = connect().await?;

    tracing::info!("Running catalog migrations...");
    sqlx::migrate!("../../migrations").run(&pool).await?;

    tracing::info!("Catalog migrations complete!");
    Ok(())
}
