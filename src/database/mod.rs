pub mod activities_repo;
pub mod activity_participants_repo;
pub mod seed;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  name TEXT PRIMARY KEY NOT NULL,
  description TEXT NOT NULL,
  schedule TEXT NOT NULL,
  max_participants INTEGER NOT NULL CHECK (max_participants >= 0),
  position INTEGER NOT NULL
)
"#;

const SQL_CREATE_ACTIVITY_PARTICIPANTS: &str = r#"
CREATE TABLE IF NOT EXISTS activity_participants (
  signup_id TEXT NOT NULL,
  activity_name TEXT NOT NULL REFERENCES activities(name) ON DELETE CASCADE,
  email TEXT NOT NULL,
  source TEXT NOT NULL,
  UNIQUE (activity_name, email)
)
"#;

/// Opens the pool. It holds a single connection that never expires: signup
/// checks and inserts run one transaction at a time, and `sqlite::memory:`
/// keeps its data for as long as the pool lives.
pub async fn connect(database_url: &str) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

pub async fn init_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_ACTIVITIES).execute(pool).await?;
    sqlx::query(SQL_CREATE_ACTIVITY_PARTICIPANTS)
        .execute(pool)
        .await?;
    Ok(())
}

/// Connect, create tables, and seed the default catalog into an empty database.
pub async fn prepare(database_url: &str) -> sqlx::Result<SqlitePool> {
    let pool = connect(database_url).await?;
    init_schema(&pool).await?;
    seed::seed_if_empty(&pool, seed::DEFAULT_ACTIVITIES).await?;
    Ok(pool)
}
