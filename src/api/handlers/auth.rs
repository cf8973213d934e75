use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::{requests::LoginRequest, responses::MessageResponse};
use crate::api::extractors::{auth::{AuthUser, TOKEN_COOKIE}, json::ApiJson};
use crate::domain::models::auth::{LoginResponse, ProtectedResponse};
use std::sync::Arc;
use tower_cookies::{Cookies, Cookie};
use tower_cookies::cookie::SameSite;
use tracing::info;

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.facade.authenticate(&payload.email, &payload.password).await?;
    let access_token = state.auth_service.issue_access_token(&user)?;

    set_token_cookie(&cookies, &access_token, state.auth_service.access_ttl());

    info!("User logged in: {}", user.id);

    Ok(Json(LoginResponse { access_token }))
}

pub async fn logout(cookies: Cookies) -> impl IntoResponse {
    cookies.remove(Cookie::build((TOKEN_COOKIE, "")).path("/").into());
    info!("User logged out");
    Json(MessageResponse::new("Logged out"))
}

pub async fn protected(AuthUser(user): AuthUser) -> impl IntoResponse {
    Json(ProtectedResponse {
        message: format!("Hello, user {}", user.id),
        is_admin: user.is_admin,
    })
}

fn set_token_cookie(cookies: &Cookies, token: &str, ttl: chrono::Duration) {
    let mut cookie = Cookie::new(TOKEN_COOKIE, token.to_string());
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::seconds(ttl.num_seconds()));
    cookies.add(cookie);
}
