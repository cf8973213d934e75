use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::{requests::{CreateAmenityRequest, UpdateAmenityRequest}, responses::MessageResponse};
use crate::api::extractors::{auth::AdminUser, json::ApiJson};
use std::sync::Arc;

pub async fn list_amenities(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.facade.list_amenities().await?))
}

pub async fn create_amenity(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    ApiJson(payload): ApiJson<CreateAmenityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.facade.create_amenity(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_amenity(
    State(state): State<Arc<AppState>>,
    Path(amenity_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.facade.get_amenity(&amenity_id).await?))
}

pub async fn update_amenity(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(amenity_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateAmenityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.facade.update_amenity(&amenity_id, payload.name).await?;
    Ok(Json(updated))
}

pub async fn delete_amenity(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(amenity_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.facade.delete_amenity(&amenity_id).await?;
    Ok(Json(MessageResponse::new("Amenity deleted successfully")))
}
