use sqlx::SqlitePool;

use super::SqliteInitError;

/// The schema shipped with the crate. All statements are `IF NOT EXISTS`.
pub const EMBEDDED_SCHEMA: &str = include_str!("../../schema.sql");

/// Executes a multi-statement schema script as-is.
///
/// `SQLite` runs each statement in autocommit mode, so a failure part-way
/// leaves the statements before it applied.
pub(super) async fn apply_script(pool: &SqlitePool, script: &str) -> Result<(), SqliteInitError> {
    let done = sqlx::raw_sql(script).execute(pool).await?;
    tracing::debug!(rows_affected = done.rows_affected(), "schema script applied");
    Ok(())
}
