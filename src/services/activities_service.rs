use sqlx::SqlitePool;
use std::collections::HashMap;

use crate::database::{activities_repo, activity_participants_repo};
use crate::models::{Activity, ActivityCatalog};

/// Full catalog in display order, participants in signup order.
pub async fn load_catalog(pool: &SqlitePool) -> sqlx::Result<ActivityCatalog> {
    let rows = activities_repo::list_activities(pool).await?;
    let participant_rows = activity_participants_repo::list_participants(pool).await?;

    let mut participants: HashMap<String, Vec<String>> = HashMap::new();
    for row in participant_rows {
        participants
            .entry(row.activity_name)
            .or_default()
            .push(row.email);
    }

    let catalog = rows
        .into_iter()
        .map(|row| {
            let enrolled = participants.remove(&row.name).unwrap_or_default();
            let activity = Activity {
                description: row.description,
                schedule: row.schedule,
                max_participants: u32::try_from(row.max_participants).unwrap_or(0),
                participants: enrolled,
            };
            (row.name, activity)
        })
        .collect();

    Ok(catalog)
}
