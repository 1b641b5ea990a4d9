use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;
use tracing::{error, warn};

use crate::models::{ActivityCatalog, CancelSignupQuery, ErrorResponse, MessageResponse, SignupRequest};
use crate::services::activities_service;
use crate::services::signup_service::{self, SignupError, SignupSource};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

fn api_error(status: StatusCode, detail: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
}

fn reject(activity_name: &str, err: SignupError) -> (StatusCode, Json<ErrorResponse>) {
    match &err {
        SignupError::Database(e) => error!(activity = %activity_name, "signup command failed: {}", e),
        other => warn!(activity = %activity_name, reason = %other, "signup command rejected"),
    }
    api_error(err.status(), err.detail())
}

pub async fn list_activities_handler(State(pool): State<SqlitePool>) -> ApiResult<ActivityCatalog> {
    activities_service::load_catalog(&pool)
        .await
        .map(Json)
        .map_err(|e| {
            error!("catalog load failed: {}", e);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        })
}

pub async fn signup_handler(
    State(pool): State<SqlitePool>,
    Path(activity_name): Path<String>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let Json(body) = body.map_err(|e| {
        warn!(activity = %activity_name, "signup body rejected: {}", e);
        api_error(StatusCode::UNPROCESSABLE_ENTITY, e.body_text())
    })?;

    signup_service::signup(&pool, &activity_name, &body.email, SignupSource::Api)
        .await
        .map(|message| Json(MessageResponse { message }))
        .map_err(|e| reject(&activity_name, e))
}

pub async fn cancel_signup_handler(
    State(pool): State<SqlitePool>,
    Path(activity_name): Path<String>,
    query: Result<Query<CancelSignupQuery>, QueryRejection>,
) -> ApiResult<MessageResponse> {
    let Query(query) = query
        .map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, e.body_text()))?;

    signup_service::cancel_signup(&pool, &activity_name, &query.email)
        .await
        .map(|message| Json(MessageResponse { message }))
        .map_err(|e| reject(&activity_name, e))
}
