pub mod repository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqlitePoolOptions, SqliteQueryResult};

/// Result of a statement that changes rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOutcome {
    pub insert_id: i64,
    pub affected_rows: u64,
}

impl From<SqliteQueryResult> for ExecOutcome {
    fn from(result: SqliteQueryResult) -> Self {
        Self {
            insert_id: result.last_insert_rowid(),
            affected_rows: result.rows_affected(),
        }
    }
}

pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

pub async fn ping(db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("select 1").execute(db).await?;
    Ok(())
}
