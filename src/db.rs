// src/db.rs
// SQLite bootstrap: production PRAGMAs and startup schema

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

/// Apply the production PRAGMAs and create the startup schema. The users
/// table is provisioned here for the account layer; the HTTP surface does
/// not read or write it.
pub async fn init_database(pool: &SqlitePool) -> Result<()> {
    sqlx::query("PRAGMA foreign_keys = ON").execute(pool).await?;
    sqlx::query("PRAGMA journal_mode = WAL").execute(pool).await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            username TEXT UNIQUE NOT NULL,
            password_hash TEXT NOT NULL,
            created_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database ready");
    Ok(())
}
