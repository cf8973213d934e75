use hbnb_backend::{
    api::router::create_router,
    config::{Config, Environment},
    domain::models::user::NewUser,
    infra::factory::{build_state, run_migrations},
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    Router,
};
use tower::ServiceExt;
use serde_json::{json, Value};

pub const ADMIN_EMAIL: &str = "admin@hbnb.com";
pub const ADMIN_PASSWORD: &str = "admin123";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub admin_id: String,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        run_migrations(&pool).await;

        let config = Config {
            environment: Environment::Testing,
            database_url: db_url,
            port: 0,
            jwt_secret_key: "test-secret".to_string(),
            access_token_ttl: chrono::Duration::minutes(5),
            cors_allowed_origins: vec![],
        };

        let state = Arc::new(build_state(pool.clone(), &config));

        let admin = state.facade.create_user(NewUser {
            first_name: "Admin".into(),
            last_name: "User".into(),
            email: ADMIN_EMAIL.into(),
            password: ADMIN_PASSWORD.into(),
            is_admin: true,
        }).await.expect("Failed to seed admin");

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            admin_id: admin.id,
        }
    }

    /// Sends a JSON request and returns the status with the parsed body (`Null` when empty).
    pub async fn request(&self, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        (status, parse_body(response).await)
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self.request(
            "POST",
            "/api/v1/auth/login",
            None,
            Some(json!({"email": email, "password": password})),
        ).await;

        if status != StatusCode::OK {
            panic!("Login failed in test helper: status {} body {}", status, body);
        }
        body["access_token"].as_str().expect("No access_token in body").to_string()
    }

    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Registers a regular user through the admin endpoint and logs them in.
    /// Returns `(user_id, access_token)`.
    pub async fn register_user(&self, first_name: &str, email: &str) -> (String, String) {
        let admin = self.admin_token().await;
        let (status, body) = self.request(
            "POST",
            "/api/v1/users",
            Some(&admin),
            Some(json!({
                "first_name": first_name,
                "last_name": "Tester",
                "email": email,
                "password": "password1"
            })),
        ).await;
        assert_eq!(status, StatusCode::CREATED, "register_user failed: {}", body);

        let id = body["id"].as_str().unwrap().to_string();
        let token = self.login(email, "password1").await;
        (id, token)
    }

    /// Creates a place owned by the token holder and returns its id.
    pub async fn create_place(&self, token: &str, title: &str) -> String {
        let (status, body) = self.request(
            "POST",
            "/api/v1/places",
            Some(token),
            Some(json!({
                "title": title,
                "description": "A quiet spot",
                "price": 120.0,
                "latitude": 48.85,
                "longitude": 2.35
            })),
        ).await;
        assert_eq!(status, StatusCode::CREATED, "create_place failed: {}", body);
        body["id"].as_str().unwrap().to_string()
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
