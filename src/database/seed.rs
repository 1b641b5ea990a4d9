use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::database::activities_repo::{self, NewActivity};
use crate::database::activity_participants_repo::{self, NewActivityParticipant};

pub struct SeedActivity {
    pub name: &'static str,
    pub description: &'static str,
    pub schedule: &'static str,
    pub max_participants: i64,
    pub participants: &'static [&'static str],
}

pub const DEFAULT_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Theater performances, acting workshops, and stage productions",
        schedule: "Wednesdays, 4:00 PM - 6:00 PM",
        max_participants: 15,
        participants: &["sarah@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop critical thinking and public speaking skills",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 16,
        participants: &["alex@mergington.edu", "maria@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore various art forms including painting, drawing, and sculpture",
        schedule: "Mondays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &[],
    },
];

/// Inserts `activities` when the catalog is empty. Returns whether anything
/// was written.
pub async fn seed_if_empty(pool: &SqlitePool, activities: &[SeedActivity]) -> sqlx::Result<bool> {
    if activities_repo::count_activities(pool).await? > 0 {
        return Ok(false);
    }
    insert_all(pool, activities).await?;
    info!("seeded {} activities", activities.len());
    Ok(true)
}

pub async fn insert_all(pool: &SqlitePool, activities: &[SeedActivity]) -> sqlx::Result<()> {
    for activity in activities {
        activities_repo::insert_activity(
            pool,
            NewActivity {
                name: activity.name,
                description: activity.description,
                schedule: activity.schedule,
                max_participants: activity.max_participants,
            },
        )
        .await?;

        let mut conn = pool.acquire().await?;
        for email in activity.participants {
            let signup_id = Uuid::new_v4().to_string();
            activity_participants_repo::insert_participant(
                &mut conn,
                NewActivityParticipant {
                    signup_id: &signup_id,
                    activity_name: activity.name,
                    email,
                    source: "seed",
                },
            )
            .await?;
        }
    }
    Ok(())
}
