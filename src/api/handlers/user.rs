use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::{requests::{CreateUserRequest, UpdateUserRequest}, responses::MessageResponse};
use crate::api::extractors::{auth::{AdminUser, AuthUser}, json::ApiJson};
use crate::domain::{models::user::UserChanges, services::permissions};
use std::sync::Arc;
use tracing::info;

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.facade.list_users().await?))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    AdminUser(admin): AdminUser,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.facade.create_user(payload.into()).await?;
    info!("Admin {} registered user {}", admin.id, created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.facade.get_user(&user_id).await?))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(user_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.facade.get_user(&user_id).await?;
    let changes = UserChanges::from(payload);
    permissions::ensure_can_update_user(&actor, &target.id, &changes)?;

    let updated = state.facade.update_user(&target.id, changes).await?;
    Ok(Json(updated))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.facade.get_user(&user_id).await?;
    permissions::ensure_not_self(&admin, &target.id)?;

    state.facade.delete_user(&target.id).await?;
    info!("Admin {} deleted user {}", admin.id, target.id);
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
