use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::{api, config::Config, persistence, state::AppState};

async fn setup_app_with(config: Config) -> axum::Router {
    let mut config = config;
    config.database_path = std::env::temp_dir()
        .join(format!("survey-test-{}.db", uuid::Uuid::new_v4()))
        .to_string_lossy()
        .to_string();

    let db = persistence::init_database(&config.database_path, config.database_max_connections)
        .await
        .expect("init db");
    let state = Arc::new(AppState::new(db, config));

    api::routes().with_state(state)
}

async fn setup_app() -> axum::Router {
    setup_app_with(Config::default()).await
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

async fn post_json(app: &axum::Router, uri: &str, body: Value) -> axum::response::Response {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

async fn get(app: &axum::Router, uri: &str) -> axum::response::Response {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(req).await.unwrap()
}

async fn create_estate(app: &axum::Router, length: i64, width: i64) -> String {
    let res = post_json(app, "/estate", json!({ "length": length, "width": width })).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    read_json(res).await["id"].as_str().expect("estate id").to_string()
}

async fn plant(app: &axum::Router, estate_id: &str, x: i64, y: i64, height: i64) {
    let res = post_json(
        app,
        &format!("/estate/{}/tree", estate_id),
        json!({ "x": x, "y": y, "height": height }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn health_check() {
    let app = setup_app().await;
    let res = get(&app, "/health").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn estate_validation() {
    let app = setup_app().await;

    let res = post_json(&app, "/estate", json!({ "length": 0, "width": 5 })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert!(body["error"].as_str().unwrap().contains("length"));

    let res = post_json(&app, "/estate", json!({ "length": "ten" })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tree_validation() {
    let app = setup_app().await;
    let estate_id = create_estate(&app, 5, 3).await;
    let uri = format!("/estate/{}/tree", estate_id);

    for body in [
        json!({ "x": 6, "y": 1, "height": 5 }),
        json!({ "x": 1, "y": 4, "height": 5 }),
        json!({ "x": 1, "y": 1, "height": 31 }),
    ] {
        let res = post_json(&app, &uri, body).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    plant(&app, &estate_id, 2, 2, 10).await;
    let res = post_json(&app, &uri, json!({ "x": 2, "y": 2, "height": 4 })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = post_json(&app, "/estate/not-a-uuid/tree", json!({ "x": 1, "y": 1, "height": 1 })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let missing = format!("/estate/{}/tree", uuid::Uuid::new_v4());
    let res = post_json(&app, &missing, json!({ "x": 1, "y": 1, "height": 1 })).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_for_estate() {
    let app = setup_app().await;
    let estate_id = create_estate(&app, 5, 5).await;

    let res = get(&app, &format!("/estate/{}/stats", estate_id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        read_json(res).await,
        json!({ "count": 0, "max": 0, "min": 0, "median": 0.0 })
    );

    plant(&app, &estate_id, 1, 1, 5).await;
    plant(&app, &estate_id, 2, 1, 3).await;
    plant(&app, &estate_id, 3, 1, 4).await;
    plant(&app, &estate_id, 4, 1, 20).await;

    let res = get(&app, &format!("/estate/{}/stats", estate_id)).await;
    assert_eq!(
        read_json(res).await,
        json!({ "count": 4, "max": 20, "min": 3, "median": 4.5 })
    );

    let res = get(&app, &format!("/estate/{}/stats", uuid::Uuid::new_v4())).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn drone_plan_distance() {
    let app = setup_app().await;
    let estate_id = create_estate(&app, 3, 3).await;
    plant(&app, &estate_id, 2, 2, 5).await;

    let res = get(&app, &format!("/estate/{}/drone-plan", estate_id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        read_json(res).await,
        json!({ "distance": 92, "horizontal_distance": 80, "elevation_distance": 10 })
    );
}

#[tokio::test]
async fn drone_plan_without_trees_is_rejected() {
    let app = setup_app().await;
    let estate_id = create_estate(&app, 3, 3).await;

    let res = get(&app, &format!("/estate/{}/drone-plan", estate_id)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["error"], "estate has no trees to survey");
}

#[tokio::test]
async fn drone_plan_with_budget() {
    let app = setup_app().await;
    let estate_id = create_estate(&app, 3, 3).await;
    plant(&app, &estate_id, 2, 2, 5).await;
    let uri = format!("/estate/{}/drone-plan", estate_id);

    let res = get(&app, &format!("{}?max_distance=45", uri)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        read_json(res).await,
        json!({ "distance": 45, "rest": { "x": 2, "y": 2 } })
    );

    let res = get(&app, &format!("{}?max_distance=92", uri)).await;
    assert_eq!(
        read_json(res).await,
        json!({ "distance": 92, "rest": { "x": 3, "y": 3 } })
    );

    for budget in ["93", "0", "-4", "far"] {
        let res = get(&app, &format!("{}?max_distance={}", uri, budget)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "budget {budget}");
    }
}

#[tokio::test]
async fn drone_plan_uses_configured_traversal() {
    let config = Config {
        grid_traversal: survey_core::GridTraversal::Fixed,
        ..Config::default()
    };
    let app = setup_app_with(config).await;
    let estate_id = create_estate(&app, 2, 3).await;
    plant(&app, &estate_id, 1, 1, 1).await;

    let res = get(&app, &format!("/estate/{}/drone-plan?max_distance=51", estate_id)).await;
    assert_eq!(
        read_json(res).await,
        json!({ "distance": 51, "rest": { "x": 1, "y": 3 } })
    );
}

#[tokio::test]
async fn drone_plan_for_unknown_estate() {
    let app = setup_app().await;
    let res = get(&app, &format!("/estate/{}/drone-plan", uuid::Uuid::new_v4())).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(res).await["error"], "estate not found");
}
