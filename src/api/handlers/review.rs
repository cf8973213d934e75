use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::{requests::{CreateReviewRequest, UpdateReviewRequest}, responses::MessageResponse};
use crate::api::extractors::{auth::AuthUser, json::ApiJson};
use crate::domain::services::permissions;
use std::sync::Arc;

pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.facade.list_reviews().await?))
}

pub async fn create_review(
    State(state): State<Arc<AppState>>,
    AuthUser(author): AuthUser,
    ApiJson(payload): ApiJson<CreateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let place = state.facade.get_place(&payload.place_id).await?;
    permissions::ensure_can_review(&author, &place)?;

    let created = state.facade.create_review(&author.id, payload.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_review(
    State(state): State<Arc<AppState>>,
    Path(review_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.facade.get_review(&review_id).await?))
}

pub async fn update_review(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(review_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let review = state.facade.get_review(&review_id).await?;
    permissions::ensure_owner_or_admin(&actor, &review.user_id)?;

    let updated = state.facade.update_review(&review.id, payload.into()).await?;
    Ok(Json(updated))
}

pub async fn delete_review(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(review_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let review = state.facade.get_review(&review_id).await?;
    permissions::ensure_owner_or_admin(&actor, &review.user_id)?;

    state.facade.delete_review(&review.id).await?;
    Ok(Json(MessageResponse::new("Review deleted successfully")))
}
