//! End-to-end flows through the router against a real database.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p thirdspace-server -- --ignored

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use thirdspace_server::db::migrations;
use thirdspace_server::{build_router, create_pool, AppState, ServerConfig};

async fn app() -> Router {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");
    migrations::run(&pool).await.expect("migrations failed");
    build_router(AppState::new(pool), &ServerConfig::default())
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn unique(tag: &str) -> String {
    format!("{}-{}", tag, Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

fn space_input(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Big windows, long tables",
        "tags": "study,wifi",
        "photo_url": "https://example.com/photo.jpg",
        "location_data": "https://maps.example.com/?q=study-hall"
    })
}

#[tokio::test]
#[ignore = "requires database"]
async fn user_creation_and_duplicate_email() {
    let app = app().await;
    let started = Utc::now();
    let user = json!({ "email": format!("{}@example.com", unique("u")), "username": "ada" });

    let (status, body) = call(&app, Method::POST, "/user/new", Some(user.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User created");
    assert!(body["user"]["id"].as_i64().unwrap() > 0);
    let created_at: DateTime<Utc> = body["user"]["created_at"].as_str().unwrap().parse().unwrap();
    assert!(created_at >= started - chrono::Duration::seconds(1));

    let (status, body) = call(&app, Method::POST, "/user/new", Some(user)).await;
    assert!(status.is_client_error());
    assert_eq!(body["error"], "conflict");
    assert_eq!(body["detail"], "user already exists");
}

#[tokio::test]
#[ignore = "requires database"]
async fn login_finds_registered_user() {
    let app = app().await;
    let email = format!("{}@example.com", unique("login"));
    // Stored trimmed, so the padded registration is found by the bare address
    let user = json!({ "email": format!("  {email} "), "username": "grace" });
    call(&app, Method::POST, "/user/new", Some(user)).await;

    let (status, body) = call(&app, Method::POST, "/user/login", Some(json!({ "email": email }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "grace");

    let missing = json!({ "email": format!("{}@example.invalid", unique("none")) });
    let (status, _) = call(&app, Method::POST, "/user/login", Some(missing)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn space_round_trip_and_newest_first() {
    let app = app().await;

    let (_, older) = call(&app, Method::POST, "/third_space/new", Some(space_input("Older"))).await;
    let input = space_input(&unique("Study Hall"));
    let (status, created) = call(&app, Method::POST, "/third_space/new", Some(input.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["message"], "Space created");
    let id = created["id"].as_i64().unwrap();

    let (status, body) = call(&app, Method::GET, &format!("/third_space/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let space = &body["space"];
    assert_eq!(space["id"], id);
    for field in ["name", "description", "tags", "photo_url", "location_data"] {
        assert_eq!(space[field], input[field], "{field} differs");
    }
    assert!(space["created_at"].is_string());

    let (status, body) = call(&app, Method::GET, "/third_space/", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["spaces"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    let pos = |id: i64| ids.iter().position(|x| *x == id).unwrap();
    assert!(pos(id) < pos(older["id"].as_i64().unwrap()));
}

#[tokio::test]
#[ignore = "requires database"]
async fn unknown_space_is_not_found() {
    let app = app().await;
    let (status, body) = call(&app, Method::GET, &format!("/third_space/{}", i64::MAX), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["detail"], format!("space '{}' not found", i64::MAX));
}

#[tokio::test]
#[ignore = "requires database"]
async fn review_flow() {
    let app = app().await;
    let user = json!({ "email": format!("{}@example.com", unique("r")), "username": "rev" });
    let (_, user) = call(&app, Method::POST, "/user/new", Some(user)).await;
    let (_, space) = call(&app, Method::POST, "/third_space/new", Some(space_input("Garden"))).await;
    let user_id = user["user"]["id"].as_i64().unwrap();
    let space_id = space["id"].as_i64().unwrap();

    let review = json!({
        "title": "Peaceful",
        "description": "Birdsong all afternoon",
        "rating": 5,
        "user_id": user_id,
        "space_id": space_id
    });
    let (status, body) = call(&app, Method::POST, "/third_space/new_review", Some(review)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Review created");
    let review_id = body["id"].as_i64().unwrap();

    let (status, body) =
        call(&app, Method::GET, &format!("/third_space/{space_id}/reviews"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reviews"][0]["id"], review_id);

    let dangling = json!({
        "title": "Ghost",
        "description": "",
        "rating": 3,
        "user_id": user_id,
        "space_id": i64::MAX
    });
    let (status, body) = call(&app, Method::POST, "/third_space/new_review", Some(dangling)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_reference");
}
