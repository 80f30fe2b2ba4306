mod common;

use std::sync::Arc;

use common::FailingAccountStore;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/health")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "account-service");
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "abc123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "user registered successfully" }));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;

    // Create first account
    app.post("/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "abc123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Same username with different email and password is still a conflict
    let response = app
        .post("/register")
        .json(&json!({
            "username": "alice",
            "email": "other@example.com",
            "password": "xyz789"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_register_rejects_weak_passwords() {
    let app = TestApp::spawn().await;

    // Too short, no digit, no letter, disallowed character
    for (i, password) in ["a1", "letters", "123456", "abc 123"].iter().enumerate() {
        let response = app
            .post("/register")
            .json(&json!({
                "username": format!("user{}", i),
                "email": format!("user{}@example.com", i),
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "password {:?} should have been rejected",
            password
        );

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert!(body["message"].as_str().unwrap().contains("password policy"));
    }
}

#[tokio::test]
async fn test_register_weak_password_persists_nothing() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register")
        .json(&json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "letters"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The username is still free, so a valid retry succeeds
    let retry = app
        .post("/register")
        .json(&json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "abc123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(retry.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_register_empty_username() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register")
        .json(&json!({
            "username": "",
            "email": "alice@example.com",
            "password": "abc123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("username"));
}

#[tokio::test]
async fn test_register_empty_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register")
        .json(&json!({
            "username": "alice",
            "email": "",
            "password": "abc123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("mail"));
}

#[tokio::test]
async fn test_concurrent_duplicate_registration() {
    let app = TestApp::spawn().await;

    let body = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "abc123"
    });

    let (first, second) = tokio::join!(
        app.post("/register").json(&body).send(),
        app.post("/register").json(&body).send(),
    );

    let mut statuses = vec![
        first.expect("Failed to execute request").status(),
        second.expect("Failed to execute request").status(),
    ];
    statuses.sort();

    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.post("/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "abc123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/login")
        .json(&json!({
            "username": "alice",
            "password": "abc123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body.as_object().unwrap().len(), 1);

    let token = body["accessToken"].as_str().expect("accessToken missing");

    // The token verifies against the signing secret and carries the stored
    // identity with a 24 hour lifetime
    let claims = app
        .token_issuer
        .verify(token)
        .expect("Failed to verify access token");
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.email, "alice@example.com");
    assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);

    let now = chrono::Utc::now().timestamp();
    assert!((claims.iat - now).abs() <= 5);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.post("/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "abc123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Unknown username
    let unknown = app
        .post("/login")
        .json(&json!({ "username": "ghost", "password": "abc123" }))
        .send()
        .await
        .expect("Failed to execute request");
    let unknown_status = unknown.status();
    let unknown_body: serde_json::Value =
        unknown.json().await.expect("Failed to parse response");

    // Known username, wrong password
    let wrong = app
        .post("/login")
        .json(&json!({ "username": "alice", "password": "abc124" }))
        .send()
        .await
        .expect("Failed to execute request");
    let wrong_status = wrong.status();
    let wrong_body: serde_json::Value = wrong.json().await.expect("Failed to parse response");

    // Empty username
    let empty = app
        .post("/login")
        .json(&json!({ "username": "", "password": "abc123" }))
        .send()
        .await
        .expect("Failed to execute request");
    let empty_status = empty.status();
    let empty_body: serde_json::Value = empty.json().await.expect("Failed to parse response");

    assert_eq!(unknown_status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_status, StatusCode::BAD_REQUEST);
    assert_eq!(empty_status, StatusCode::BAD_REQUEST);

    // Byte-identical bodies: no username probing
    assert_eq!(unknown_body, wrong_body);
    assert_eq!(unknown_body, empty_body);
}

#[tokio::test]
async fn test_store_failure_returns_generic_error() {
    let app = TestApp::spawn_with_store(Arc::new(FailingAccountStore)).await;

    let register = app
        .post("/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "abc123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(register.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let register_body: serde_json::Value =
        register.json().await.expect("Failed to parse response");
    assert_eq!(register_body, json!({ "message": "internal server error" }));

    let login = app
        .post("/login")
        .json(&json!({ "username": "alice", "password": "abc123" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(login.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let login_body: serde_json::Value = login.json().await.expect("Failed to parse response");
    assert_eq!(login_body, json!({ "message": "internal server error" }));
}
