//! Database-backed model tests.
//!
//! Skipped when `SKIP_DB_TESTS` is set or no `DATABASE_URL` is configured.

use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;


/// CRUD operations tests for all models
pub mod crud_tests;


/// Connect and migrate, or `None` when the environment has no database.
pub(crate) async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("skip: no database configured for model tests");
        return Ok(None);
    }
    let db = crate::db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}
