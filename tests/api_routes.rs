mod support;

use reqwest::StatusCode;
use serde_json::{json, Value};

use support::{spawn_app, spawn_with, TINY_FULL_CLUB};

async fn catalog(app: &support::TestApp) -> Value {
    app.http()
        .get(app.url("/activities"))
        .send()
        .await
        .expect("get activities")
        .json()
        .await
        .expect("catalog json")
}

async fn post_signup(app: &support::TestApp, path: &str, body: Value) -> (StatusCode, Value) {
    let resp = app
        .http()
        .post(app.url(path))
        .json(&body)
        .send()
        .await
        .expect("post signup");
    let status = resp.status();
    (status, resp.json().await.expect("json body"))
}

async fn delete_signup(app: &support::TestApp, path: &str) -> (StatusCode, Value) {
    let resp = app
        .http()
        .delete(app.url(path))
        .send()
        .await
        .expect("delete signup");
    let status = resp.status();
    (status, resp.json().await.expect("json body"))
}

fn participants(catalog: &Value, activity: &str) -> Vec<String> {
    catalog[activity]["participants"]
        .as_array()
        .expect("participants array")
        .iter()
        .map(|v| v.as_str().expect("email string").to_string())
        .collect()
}

#[tokio::test]
async fn catalog_lists_seeded_activities_in_order() {
    let app = spawn_app().await;
    let resp = app
        .http()
        .get(app.url("/activities"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();

    let order = [
        "Chess Club",
        "Programming Class",
        "Gym Class",
        "Drama Club",
        "Debate Team",
        "Art Club",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|name| body.find(&format!("\"{}\"", name)).expect(name))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "order: {}", body);

    let data: Value = serde_json::from_str(&body).unwrap();
    for (_, details) in data.as_object().unwrap() {
        assert!(details["description"].is_string());
        assert!(details["schedule"].is_string());
        assert!(details["max_participants"].is_u64());
        assert!(details["participants"].is_array());
    }
    assert_eq!(
        participants(&data, "Chess Club"),
        vec!["michael@mergington.edu", "daniel@mergington.edu"]
    );
    assert!(participants(&data, "Art Club").is_empty());
}

#[tokio::test]
async fn signup_appends_lowercased_email() {
    let app = spawn_app().await;
    let (status, body) = post_signup(
        &app,
        "/activities/Chess%20Club/signup",
        json!({ "email": "Test@Mergington.edu" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Successfully signed up test@mergington.edu for Chess Club"
    );

    let data = catalog(&app).await;
    assert_eq!(
        participants(&data, "Chess Club"),
        vec![
            "michael@mergington.edu",
            "daniel@mergington.edu",
            "test@mergington.edu"
        ]
    );
}

#[tokio::test]
async fn signup_rejects_bad_emails_with_422() {
    let app = spawn_app().await;
    for email in ["test@gmail.com", "notanemail", ""] {
        let (status, body) = post_signup(
            &app,
            "/activities/Chess%20Club/signup",
            json!({ "email": email }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", email);
        assert!(body["detail"].as_str().unwrap().contains("mergington.edu"));
    }

    let (status, body) =
        post_signup(&app, "/activities/Chess%20Club/signup", json!({ "mail": "x" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    assert_eq!(participants(&catalog(&app).await, "Chess Club").len(), 2);
}

#[tokio::test]
async fn signup_for_unknown_activity_is_404() {
    let app = spawn_app().await;
    let (status, body) = post_signup(
        &app,
        "/activities/NonExistent/signup",
        json!({ "email": "test@mergington.edu" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let app = spawn_app().await;
    let path = "/activities/Chess%20Club/signup";
    let (first, _) = post_signup(&app, path, json!({ "email": "test@mergington.edu" })).await;
    assert_eq!(first, StatusCode::OK);

    let (status, body) = post_signup(&app, path, json!({ "email": "TEST@mergington.edu" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "You are already signed up for this activity");
}

#[tokio::test]
async fn duplicate_check_runs_before_capacity_check() {
    let app = spawn_with(TINY_FULL_CLUB).await;
    let (status, body) = post_signup(
        &app,
        "/activities/Robotics%20Lab/signup",
        json!({ "email": "ada@mergington.edu" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("already signed up"));
}

#[tokio::test]
async fn full_activity_rejects_signup() {
    let app = spawn_with(TINY_FULL_CLUB).await;
    let (status, body) = post_signup(
        &app,
        "/activities/Robotics%20Lab/signup",
        json!({ "email": "overflow@mergington.edu" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().to_lowercase().contains("full"));
    assert_eq!(participants(&catalog(&app).await, "Robotics Lab").len(), 2);
}

#[tokio::test]
async fn cancel_removes_the_signup() {
    let app = spawn_app().await;
    post_signup(
        &app,
        "/activities/Chess%20Club/signup",
        json!({ "email": "test@mergington.edu" }),
    )
    .await;

    let (status, body) =
        delete_signup(&app, "/activities/Chess%20Club/signup?email=test@mergington.edu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully cancelled signup for Chess Club");
    assert!(!participants(&catalog(&app).await, "Chess Club")
        .contains(&"test@mergington.edu".to_string()));
}

#[tokio::test]
async fn cancel_rejections() {
    let app = spawn_app().await;

    let (status, body) =
        delete_signup(&app, "/activities/Chess%20Club/signup?email=test@mergington.edu").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("not signed up"));

    let (status, body) =
        delete_signup(&app, "/activities/Chess%20Club/signup?email=test@gmail.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("mergington.edu"));

    let (status, body) =
        delete_signup(&app, "/activities/NonExistent/signup?email=test@mergington.edu").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");

    let (status, body) = delete_signup(&app, "/activities/Chess%20Club/signup").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn root_redirects_to_board() {
    let app = spawn_app().await;
    let resp = app.http().get(app.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()["location"], "/board");
}

#[tokio::test]
async fn responses_are_not_cached_and_assets_are_served() {
    let app = spawn_app().await;
    let resp = app.http().get(app.url("/activities")).send().await.unwrap();
    assert_eq!(resp.headers()["cache-control"], "no-store");

    let resp = app
        .http()
        .get(app.url("/assets/styles.css"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains(".activity-card"));
}
