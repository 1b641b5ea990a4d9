use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::{error, warn};

use crate::page::controller::{INVALID_EMAIL, LOAD_ERROR, NO_ACTIVITY_SELECTED, SIGNUP_FAILED};
use crate::page::view::{build_cards, build_select_options, ActivityCardView, SelectOptionView};
use crate::services::activities_service;
use crate::services::email::validate_email;
use crate::services::signup_service::{self, SignupError, SignupSource};

#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub cards: Vec<ActivityCardView>,
    pub load_error: Option<String>,
    pub options: Vec<SelectOptionView>,
    pub notice: Option<BoardNotice>,
    pub build_id: &'static str,
}

pub struct BoardNotice {
    pub text: String,
    pub kind: &'static str, // success|error
}

#[derive(Debug, Deserialize, Default)]
pub struct BoardQuery {
    pub notice: Option<String>,
}

fn notice_for(code: &str) -> Option<BoardNotice> {
    let (text, kind) = match code {
        "signup_ok" => (
            "You're signed up! Your email now appears on the activity card.".to_string(),
            "success",
        ),
        "invalid_email" => (INVALID_EMAIL.to_string(), "error"),
        "no_activity" => (NO_ACTIVITY_SELECTED.to_string(), "error"),
        "unconfirmed" => ("Please confirm your signup before submitting.".to_string(), "error"),
        "not_found" => (SignupError::ActivityNotFound.to_string(), "error"),
        "already_signed_up" => (SignupError::AlreadySignedUp.to_string(), "error"),
        "full" => (SignupError::ActivityFull.to_string(), "error"),
        "error" => (SIGNUP_FAILED.to_string(), "error"),
        _ => return None,
    };
    Some(BoardNotice { text, kind })
}

pub async fn board_handler(
    Query(query): Query<BoardQuery>,
    State(pool): State<SqlitePool>,
) -> impl IntoResponse {
    let (cards, options, load_error) = match activities_service::load_catalog(&pool).await {
        Ok(catalog) => (build_cards(&catalog), build_select_options(&catalog), None),
        Err(e) => {
            error!("Error fetching activities: {}", e);
            (
                vec![],
                vec![SelectOptionView::placeholder()],
                Some(LOAD_ERROR.to_string()),
            )
        }
    };

    let template = BoardTemplate {
        cards,
        load_error,
        options,
        notice: query.notice.as_deref().and_then(notice_for),
        build_id: env!("MERGINGTON_BUILD_ID"),
    };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("board render failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BoardSignupForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub activity: String,
    pub confirm: Option<String>, // checkbox; absent when unticked
}

pub async fn board_signup_handler(
    State(pool): State<SqlitePool>,
    Form(form): Form<BoardSignupForm>,
) -> Redirect {
    let email = form.email.trim();

    let notice = if !validate_email(email) {
        "invalid_email"
    } else if form.activity.is_empty() {
        "no_activity"
    } else if form.confirm.is_none() {
        "unconfirmed"
    } else {
        match signup_service::signup(&pool, &form.activity, email, SignupSource::Website).await {
            Ok(_) => "signup_ok",
            Err(e) => {
                warn!(activity = %form.activity, "Board signup failed: {}", e);
                e.notice_code()
            }
        }
    };

    Redirect::to(&format!("/board?notice={}", notice))
}
