use std::{path::PathBuf, str::FromStr};

use moodmeet_user::RegisterInput;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    moodmeet_db::migrate(&pool).await?;

    Ok(pool)
}

#[allow(dead_code)]
pub async fn create_user(
    command: &moodmeet_user::Command,
    name: impl Into<String>,
) -> anyhow::Result<i64> {
    let name = name.into();
    let id = command
        .register(RegisterInput {
            email: format!("{name}@moodmeet.localhost"),
            password: "my_password".to_owned(),
            name,
        })
        .await?;

    Ok(id)
}
