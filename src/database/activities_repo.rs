use sqlx::{SqliteConnection, SqlitePool};

use crate::models::ActivitiesRow;

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants,
  position
FROM activities
ORDER BY position ASC, name ASC
"#;

pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<Vec<ActivitiesRow>> {
    sqlx::query_as::<_, ActivitiesRow>(SQL_LIST_ACTIVITIES)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_ACTIVITY: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants,
  position
FROM activities
WHERE name = ?
"#;

pub async fn load_activity(
    conn: &mut SqliteConnection,
    name: &str,
) -> sqlx::Result<Option<ActivitiesRow>> {
    sqlx::query_as::<_, ActivitiesRow>(SQL_LOAD_ACTIVITY)
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
}

const SQL_COUNT_ACTIVITIES: &str = r#"
SELECT COUNT(*) FROM activities
"#;

pub async fn count_activities(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_COUNT_ACTIVITIES)
        .fetch_one(pool)
        .await
}

// New rows go to the end of the catalog.
const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  name,
  description,
  schedule,
  max_participants,
  position
) VALUES (?, ?, ?, ?, (SELECT COALESCE(MAX(position) + 1, 0) FROM activities))
"#;

pub struct NewActivity<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub schedule: &'a str,
    pub max_participants: i64,
}

pub async fn insert_activity(pool: &SqlitePool, activity: NewActivity<'_>) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.max_participants)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
