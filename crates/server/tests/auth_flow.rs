use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::{Repositories, ServerState};
use service::auth::domain::Role;
use service::auth::repository::mock::MockAuthRepository;
use service::auth::repository::AuthRepository;
use service::catalog::repository::mock::MockCatalogRepository;
use service::contact::repository::mock::MockContactRepository;
use service::review::repository::mock::MockReviewRepository;
use service::shop::repository::mock::MockShopRepository;

struct TestApp {
    app: Router,
    auth_repo: Arc<MockAuthRepository>,
}

fn build_app() -> TestApp {
    let auth_repo = Arc::new(MockAuthRepository::default());
    let repos = Repositories {
        auth: auth_repo.clone(),
        catalog: Arc::new(MockCatalogRepository::default()),
        shop: Arc::new(MockShopRepository::default()),
        review: Arc::new(MockReviewRepository::default()),
        contact: Arc::new(MockContactRepository::default()),
    };
    let state = ServerState::new(repos, "test-secret", std::env::temp_dir());
    TestApp { app: routes::build_router(CorsLayer::very_permissive(), state), auth_repo }
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(serde_json::to_vec(body).unwrap())).unwrap()
}

fn get_request(uri: &str, authorization: Option<String>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn signup(app: &Router, user_name: &str, email: &str) -> Value {
    let req = json_request(
        "POST",
        "/signup",
        None,
        &json!({"userName": user_name, "email": email, "name": "Tester", "password": "S3curePass!"}),
    );
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}

async fn login(app: &Router, user_name: &str, password: &str) -> axum::response::Response {
    let req = json_request("POST", "/login", None, &json!({"userName": user_name, "password": password}));
    app.clone().oneshot(req).await.unwrap()
}

#[tokio::test]
async fn signup_issues_token_and_rejects_duplicate_email() {
    let t = build_app();
    let body = signup(&t.app, "alice", "alice@x.com").await;
    assert_eq!(body["success"], true);
    assert!(body["token"].as_str().is_some_and(|s| !s.is_empty()));

    // Same email again: 400 conflict, specific message.
    let req = json_request(
        "POST",
        "/signup",
        None,
        &json!({"userName": "alice2", "email": "alice@x.com", "name": "A", "password": "S3curePass!"}),
    );
    let resp = t.app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email Already Registered");
}

#[tokio::test]
async fn signup_validates_email_and_user_name_shape() {
    let t = build_app();
    let req = json_request(
        "POST",
        "/signup",
        None,
        &json!({"userName": "alice", "email": "not-an-email", "name": "A", "password": "S3curePass!"}),
    );
    let resp = t.app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "Invalid Email");

    let req = json_request(
        "POST",
        "/signup",
        None,
        &json!({"userName": "_x", "email": "a@x.com", "name": "A", "password": "S3curePass!"}),
    );
    let resp = t.app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "Invalid User Name");
}

#[tokio::test]
async fn login_failures_are_distinguishable() {
    let t = build_app();
    signup(&t.app, "alice", "alice@x.com").await;

    // Wrong password: 403 with its own message.
    let resp = login(&t.app, "alice", "wrong-pass").await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(resp).await["message"], "Invalid Password");

    // Unknown username: 404.
    let resp = login(&t.app, "nobody", "whatever1").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "user not found");
}

#[tokio::test]
async fn users_route_walks_the_check_order() {
    let t = build_app();
    let body = signup(&t.app, "alice", "alice@x.com").await;
    let user_token = body["token"].as_str().unwrap().to_string();

    // No header at all.
    let resp = t.app.clone().oneshot(get_request("/users", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(resp).await["message"], "Unauthorized");

    // Wrong scheme.
    let resp = t
        .app
        .clone()
        .oneshot(get_request("/users", Some(format!("Basic {user_token}"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(resp).await["message"], "Unauthorized");

    // Tampered token.
    let resp = t
        .app
        .clone()
        .oneshot(get_request("/users", Some(format!("Bearer {user_token}x"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(resp).await["message"], "Unauthorized");

    // Valid token, wrong role: the distinct no-permission message.
    let resp = t
        .app
        .clone()
        .oneshot(get_request("/users", Some(format!("Bearer {user_token}"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(resp).await["message"], "You have no permission to do that");

    // Promote out-of-band, log in again: admin sees the full list.
    t.auth_repo.set_role("alice@x.com", Role::Admin).await.unwrap();
    let resp = login(&t.app, "alice", "S3curePass!").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let admin_token = body_json(resp).await["token"].as_str().unwrap().to_string();

    let resp = t
        .app
        .clone()
        .oneshot(get_request("/users", Some(format!("Bearer {admin_token}"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
    // password material never serializes
    assert!(body["users"][0].get("passwordHash").is_none());
    assert!(body["users"][0].get("password_hash").is_none());
}

#[tokio::test]
async fn stale_token_keeps_old_role_until_reissued() {
    let t = build_app();
    let body = signup(&t.app, "alice", "alice@x.com").await;
    let old_token = body["token"].as_str().unwrap().to_string();

    t.auth_repo.set_role("alice@x.com", Role::Admin).await.unwrap();

    // The pre-promotion token still carries role=user.
    let resp = t
        .app
        .clone()
        .oneshot(get_request("/users", Some(format!("Bearer {old_token}"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // A fresh login picks the promotion up.
    let resp = login(&t.app, "alice", "S3curePass!").await;
    let fresh = body_json(resp).await["token"].as_str().unwrap().to_string();
    let resp = t
        .app
        .clone()
        .oneshot(get_request("/users", Some(format!("Bearer {fresh}"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn make_admin_promotes_by_email() {
    let t = build_app();
    signup(&t.app, "alice", "alice@x.com").await;
    signup(&t.app, "bob_1", "bob@x.com").await;
    t.auth_repo.set_role("alice@x.com", Role::Admin).await.unwrap();
    let resp = login(&t.app, "alice", "S3curePass!").await;
    let admin_token = body_json(resp).await["token"].as_str().unwrap().to_string();

    let resp = t
        .app
        .clone()
        .oneshot(get_request("/makeAdmin/bob@x.com", Some(format!("Bearer {admin_token}"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["message"], "promotion successful");

    // Unknown email: 404.
    let resp = t
        .app
        .clone()
        .oneshot(get_request("/makeAdmin/ghost@x.com", Some(format!("Bearer {admin_token}"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Bob is admin on next login.
    let resp = login(&t.app, "bob_1", "S3curePass!").await;
    let bob_token = body_json(resp).await["token"].as_str().unwrap().to_string();
    let resp = t
        .app
        .clone()
        .oneshot(get_request("/users", Some(format!("Bearer {bob_token}"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
