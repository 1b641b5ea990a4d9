#![allow(dead_code)]

use std::net::SocketAddr;

use mergington::client::ActivitiesClient;
use mergington::database::{self, seed};
use mergington::web::build_router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;

pub const TINY_FULL_CLUB: &[seed::SeedActivity] = &[
    seed::SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    seed::SeedActivity {
        name: "Robotics Lab",
        description: "Two seats, both taken",
        schedule: "Saturdays, 10:00 AM - 12:00 PM",
        max_participants: 2,
        participants: &["ada@mergington.edu", "grace@mergington.edu"],
    },
];

pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn client(&self) -> ActivitiesClient {
        ActivitiesClient::new(&self.url("/")).expect("client")
    }

    /// Plain reqwest client that does not follow redirects.
    pub fn http(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("http client")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_with(seed::DEFAULT_ACTIVITIES).await
}

pub async fn spawn_with(activities: &[seed::SeedActivity]) -> TestApp {
    let pool = database::connect("sqlite::memory:")
        .await
        .expect("connect sqlite");
    database::init_schema(&pool).await.expect("create schema");
    seed::insert_all(&pool, activities)
        .await
        .expect("seed activities");

    let app = build_router(pool.clone(), concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    TestApp { addr, pool }
}

/// An address with nothing listening on it.
pub async fn dead_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    listener.local_addr().expect("local addr")
}

/// Serves a hand-built router in place of the real API.
pub async fn spawn_stub(app: axum::Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });
    addr
}
