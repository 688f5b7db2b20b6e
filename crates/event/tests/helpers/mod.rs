use std::{path::PathBuf, str::FromStr};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    moodmeet_db::migrate(&pool).await?;

    Ok(pool)
}

#[allow(dead_code)]
pub async fn create_user(pool: &SqlitePool, email: &str) -> anyhow::Result<i64> {
    let result = sqlx::query("INSERT INTO user (email, name, created_at) VALUES (?1, ?2, 0)")
        .bind(email)
        .bind("tester")
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

#[allow(dead_code)]
pub async fn popularity(pool: &SqlitePool, event_id: i64) -> anyhow::Result<i64> {
    Ok(
        sqlx::query_scalar("SELECT popularity FROM event WHERE id = ?1")
            .bind(event_id)
            .fetch_one(pool)
            .await?,
    )
}
