pub mod middleware;
pub mod routes;

use std::path::Path;

use axum::{
    middleware as axum_middleware,
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::web::middleware::request_log;
use crate::web::routes::{activities, board};

/// The whole application: JSON API, board page and static assets.
pub fn build_router(pool: SqlitePool, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/board") }))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler).delete(activities::cancel_signup_handler),
        )
        .route("/board", get(board::board_handler))
        .route("/board/signup", post(board::board_signup_handler))
        .nest_service(
            "/assets",
            get_service(ServeDir::new(assets_dir.as_ref())),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(axum_middleware::from_fn(request_log::log_requests))
        .layer(CatchPanicLayer::new())
        .with_state(pool)
}
