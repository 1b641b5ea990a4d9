use sqlx::{SqliteConnection, SqlitePool};

use crate::models::ActivityParticipantsRow;

const SQL_LIST_PARTICIPANTS: &str = r#"
SELECT
  signup_id,
  activity_name,
  email,
  source
FROM activity_participants
ORDER BY rowid ASC
"#;

pub async fn list_participants(pool: &SqlitePool) -> sqlx::Result<Vec<ActivityParticipantsRow>> {
    sqlx::query_as::<_, ActivityParticipantsRow>(SQL_LIST_PARTICIPANTS)
        .fetch_all(pool)
        .await
}

const SQL_COUNT_FOR_ACTIVITY: &str = r#"
SELECT COUNT(*)
FROM activity_participants
WHERE activity_name = ?
"#;

pub async fn count_for_activity(
    conn: &mut SqliteConnection,
    activity_name: &str,
) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_COUNT_FOR_ACTIVITY)
        .bind(activity_name)
        .fetch_one(&mut *conn)
        .await
}

const SQL_IS_SIGNED_UP: &str = r#"
SELECT EXISTS(
  SELECT 1
  FROM activity_participants
  WHERE activity_name = ?
    AND email = ?
)
"#;

pub async fn is_signed_up(
    conn: &mut SqliteConnection,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<bool> {
    let exists = sqlx::query_scalar::<_, i64>(SQL_IS_SIGNED_UP)
        .bind(activity_name)
        .bind(email)
        .fetch_one(&mut *conn)
        .await?;
    Ok(exists != 0)
}

const SQL_INSERT_PARTICIPANT: &str = r#"
INSERT INTO activity_participants (
  signup_id,
  activity_name,
  email,
  source
) VALUES (?, ?, ?, ?)
"#;

pub struct NewActivityParticipant<'a> {
    pub signup_id: &'a str,
    pub activity_name: &'a str,
    pub email: &'a str,
    pub source: &'a str, // api|website|seed
}

pub async fn insert_participant(
    conn: &mut SqliteConnection,
    participant: NewActivityParticipant<'_>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_PARTICIPANT)
        .bind(participant.signup_id)
        .bind(participant.activity_name)
        .bind(participant.email)
        .bind(participant.source)
        .execute(&mut *conn)
        .await?;
    Ok(res.rows_affected())
}

const SQL_DELETE_PARTICIPANT: &str = r#"
DELETE FROM activity_participants
WHERE activity_name = ?
  AND email = ?
"#;

pub async fn delete_participant(
    conn: &mut SqliteConnection,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_PARTICIPANT)
        .bind(activity_name)
        .bind(email)
        .execute(&mut *conn)
        .await?;
    Ok(res.rows_affected())
}
