mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

fn user_payload(email: &str) -> serde_json::Value {
    json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "email": email,
        "password": "secret123"
    })
}

#[tokio::test]
async fn test_admin_creates_user_without_exposing_hash() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, body) = app.request("POST", "/api/v1/users", Some(&admin), Some(user_payload("Jane@Example.com"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "jane@example.com");
    assert_eq!(body["is_admin"], false);
    assert!(body.get("password_hash").is_none());
    assert!(body.get("password").is_none());

    let id = body["id"].as_str().unwrap();
    let (status, fetched) = app.request("GET", &format!("/api/v1/users/{}", id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["first_name"], "Jane");

    let (status, list) = app.request("GET", "/api/v1/users", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|u| u.get("password_hash").is_none()));
}

#[tokio::test]
async fn test_user_creation_requires_admin() {
    let app = TestApp::new().await;
    let (_, token) = app.register_user("Bob", "bob@example.com").await;

    let (status, _) = app.request("POST", "/api/v1/users", None, Some(user_payload("x@example.com"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app.request("POST", "/api/v1/users", Some(&token), Some(user_payload("x@example.com"))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Admin privileges required");
}

#[tokio::test]
async fn test_user_creation_validation() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, body) = app.request("POST", "/api/v1/users", Some(&admin), Some(user_payload("admin@hbnb.com"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already registered");

    let (status, body) = app.request("POST", "/api/v1/users", Some(&admin), Some(user_payload("not-an-email"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email format");

    let mut short_password = user_payload("short@example.com");
    short_password["password"] = json!("abc");
    let (status, _) = app.request("POST", "/api/v1/users", Some(&admin), Some(short_password)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut blank_name = user_payload("blank@example.com");
    blank_name["first_name"] = json!("   ");
    let (status, body) = app.request("POST", "/api/v1/users", Some(&admin), Some(blank_name)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "First name cannot be empty");
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let app = TestApp::new().await;
    let (status, body) = app.request("GET", "/api/v1/users/does-not-exist", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_regular_user_updates_own_names_only() {
    let app = TestApp::new().await;
    let (bob_id, bob) = app.register_user("Bob", "bob@example.com").await;
    let (carol_id, _) = app.register_user("Carol", "carol@example.com").await;
    let uri = format!("/api/v1/users/{}", bob_id);

    let (status, body) = app.request("PUT", &uri, Some(&bob), Some(json!({"first_name": "Robert"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Robert");
    assert_eq!(body["email"], "bob@example.com");

    let (status, body) = app.request("PUT", &uri, Some(&bob), Some(json!({"email": "new@example.com"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "You cannot modify email or password");

    let (status, _) = app.request("PUT", &uri, Some(&bob), Some(json!({"password": "another1"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.request("PUT", &uri, Some(&bob), Some(json!({"email": null, "first_name": "Rob"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "You cannot modify email or password");

    let (status, body) = app.request("PUT", &uri, Some(&bob), Some(json!({"is_admin": true}))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Admin privileges required");

    let (status, body) = app.request(
        "PUT", &format!("/api/v1/users/{}", carol_id), Some(&bob), Some(json!({"first_name": "Hacked"})),
    ).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Unauthorized action");
}

#[tokio::test]
async fn test_update_checks_existence_before_permission() {
    let app = TestApp::new().await;
    let (_, bob) = app.register_user("Bob", "bob@example.com").await;

    let (status, _) = app.request("PUT", "/api/v1/users/missing", None, Some(json!({"first_name": "X"}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.request("PUT", "/api/v1/users/missing", Some(&bob), Some(json!({"first_name": "X"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_updates_credentials_and_role() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (bob_id, _) = app.register_user("Bob", "bob@example.com").await;
    app.register_user("Carol", "carol@example.com").await;
    let uri = format!("/api/v1/users/{}", bob_id);

    let (status, body) = app.request("PUT", &uri, Some(&admin), Some(json!({"email": "carol@example.com"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already in use");

    let (status, body) = app.request(
        "PUT", &uri, Some(&admin),
        Some(json!({"email": "robert@example.com", "password": "newpass1", "is_admin": true})),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "robert@example.com");
    assert_eq!(body["is_admin"], true);

    let token = app.login("robert@example.com", "newpass1").await;
    let (status, body) = app.request("GET", "/api/v1/auth/protected", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_admin"], true);
}

#[tokio::test]
async fn test_admin_cannot_delete_self() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, body) = app.request("DELETE", &format!("/api/v1/users/{}", app.admin_id), Some(&admin), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Cannot delete yourself");
}

#[tokio::test]
async fn test_deleting_user_cascades_to_places_and_reviews() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (bob_id, bob) = app.register_user("Bob", "bob@example.com").await;
    let (_, carol) = app.register_user("Carol", "carol@example.com").await;

    let bob_place = app.create_place(&bob, "Bob's loft").await;
    let carol_place = app.create_place(&carol, "Carol's cabin").await;

    let (status, _) = app.request(
        "POST", "/api/v1/reviews", Some(&bob),
        Some(json!({"text": "Great", "rating": 5, "place_id": carol_place})),
    ).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app.request("DELETE", &format!("/api/v1/users/{}", bob_id), Some(&bob), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.request("DELETE", &format!("/api/v1/users/{}", bob_id), Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, _) = app.request("GET", &format!("/api/v1/places/{}", bob_place), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, reviews) = app.request("GET", &format!("/api/v1/places/{}/reviews", carol_place), None, None).await;
    assert_eq!(reviews.as_array().unwrap().len(), 0);
}
