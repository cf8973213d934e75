use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::{requests::{CreatePlaceRequest, UpdatePlaceRequest}, responses::MessageResponse};
use crate::api::extractors::{auth::AuthUser, json::ApiJson};
use crate::domain::services::permissions;
use std::sync::Arc;

pub async fn list_places(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.facade.list_places().await?))
}

pub async fn create_place(
    State(state): State<Arc<AppState>>,
    AuthUser(owner): AuthUser,
    ApiJson(payload): ApiJson<CreatePlaceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let details = state.facade.create_place(&owner.id, payload.into()).await?;
    Ok((StatusCode::CREATED, Json(details)))
}

pub async fn get_place(
    State(state): State<Arc<AppState>>,
    Path(place_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.facade.get_place_details(&place_id).await?))
}

pub async fn update_place(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(place_id): Path<String>,
    ApiJson(payload): ApiJson<UpdatePlaceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let place = state.facade.get_place(&place_id).await?;
    permissions::ensure_owner_or_admin(&actor, &place.owner_id)?;

    let details = state.facade.update_place(&place.id, payload.into()).await?;
    Ok(Json(details))
}

pub async fn delete_place(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(place_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let place = state.facade.get_place(&place_id).await?;
    permissions::ensure_owner_or_admin(&actor, &place.owner_id)?;

    state.facade.delete_place(&place.id).await?;
    Ok(Json(MessageResponse::new("Place deleted successfully")))
}

pub async fn list_place_reviews(
    State(state): State<Arc<AppState>>,
    Path(place_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.facade.list_reviews_by_place(&place_id).await?))
}
