// One row per signup, in signup order (rowid).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityParticipantsRow {
    pub signup_id: String,
    pub activity_name: String,
    pub email: String,
    pub source: String, // api|website|seed
}
