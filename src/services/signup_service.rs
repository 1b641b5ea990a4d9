use axum::http::StatusCode;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::database::activity_participants_repo::{self, NewActivityParticipant};
use crate::database::activities_repo;
use crate::services::email::{normalize_email, validate_email, SCHOOL_EMAIL_SUFFIX};

/// Where a signup came from; stored with the participant row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupSource {
    Api,
    Website,
}

impl SignupSource {
    pub fn as_str(self) -> &'static str {
        match self {
            SignupSource::Api => "api",
            SignupSource::Website => "website",
        }
    }
}

/// Rejections for signup and cancel commands. The display text is the
/// `detail` shown to the student.
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    /// Body validation failure on signup.
    #[error("Email must be from mergington.edu domain")]
    InvalidEmail,
    /// Domain check failure on cancel.
    #[error("Email must be from mergington.edu domain")]
    WrongDomain,
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("You are already signed up for this activity")]
    AlreadySignedUp,
    #[error("This activity is full")]
    ActivityFull,
    #[error("You are not signed up for this activity")]
    NotSignedUp,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl SignupError {
    pub fn status(&self) -> StatusCode {
        match self {
            SignupError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            SignupError::WrongDomain => StatusCode::BAD_REQUEST,
            SignupError::ActivityNotFound | SignupError::NotSignedUp => StatusCode::NOT_FOUND,
            SignupError::AlreadySignedUp | SignupError::ActivityFull => StatusCode::BAD_REQUEST,
            SignupError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text safe to hand to a client. Database details stay in the logs.
    pub fn detail(&self) -> String {
        match self {
            SignupError::Database(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Short code used by the board page's post/redirect/get cycle.
    pub fn notice_code(&self) -> &'static str {
        match self {
            SignupError::InvalidEmail | SignupError::WrongDomain => "invalid_email",
            SignupError::ActivityNotFound => "not_found",
            SignupError::AlreadySignedUp => "already_signed_up",
            SignupError::ActivityFull => "full",
            SignupError::NotSignedUp => "not_signed_up",
            SignupError::Database(_) => "error",
        }
    }
}

/// Adds `email` (lowercased) to `activity_name`. Returns the confirmation
/// message.
///
/// Rejections are checked in this order: email format, unknown activity,
/// duplicate signup, capacity.
pub async fn signup(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
    source: SignupSource,
) -> Result<String, SignupError> {
    let email = normalize_email(email);
    if !validate_email(&email) {
        return Err(SignupError::InvalidEmail);
    }

    let mut tx = pool.begin().await?;

    let activity = activities_repo::load_activity(&mut tx, activity_name)
        .await?
        .ok_or(SignupError::ActivityNotFound)?;

    if activity_participants_repo::is_signed_up(&mut tx, activity_name, &email).await? {
        return Err(SignupError::AlreadySignedUp);
    }

    let enrolled = activity_participants_repo::count_for_activity(&mut tx, activity_name).await?;
    if enrolled >= activity.max_participants {
        return Err(SignupError::ActivityFull);
    }

    let signup_id = Uuid::new_v4().to_string();
    activity_participants_repo::insert_participant(
        &mut tx,
        NewActivityParticipant {
            signup_id: &signup_id,
            activity_name,
            email: &email,
            source: source.as_str(),
        },
    )
    .await?;
    tx.commit().await?;

    info!(
        activity = %activity_name,
        signup_id = %signup_id,
        source = source.as_str(),
        "signup accepted"
    );
    Ok(format!("Successfully signed up {} for {}", email, activity_name))
}

/// Removes `email` from `activity_name`. The domain check runs on the raw
/// value, the lookup on its lowercased form.
pub async fn cancel_signup(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let mut tx = pool.begin().await?;

    if activities_repo::load_activity(&mut tx, activity_name)
        .await?
        .is_none()
    {
        return Err(SignupError::ActivityNotFound);
    }

    if !email.ends_with(SCHOOL_EMAIL_SUFFIX) {
        return Err(SignupError::WrongDomain);
    }

    let email = email.to_lowercase();
    let removed =
        activity_participants_repo::delete_participant(&mut tx, activity_name, &email).await?;
    if removed == 0 {
        return Err(SignupError::NotSignedUp);
    }
    tx.commit().await?;

    info!(activity = %activity_name, "signup cancelled");
    Ok(format!("Successfully cancelled signup for {}", activity_name))
}
