use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::error::AppError;
use super::amenity::Amenity;
use super::user::User;

pub const TITLE_MAX_LEN: usize = 100;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Place {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewPlaceParams {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub amenity_ids: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PlaceChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenity_ids: Option<Vec<String>>,
}

impl Place {
    /// Builds a validated place owned by `owner_id`.
    pub fn new(owner_id: String, params: &NewPlaceParams) -> Result<Self, AppError> {
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: validate_title(&params.title)?,
            description: params.description.clone().unwrap_or_default(),
            price: validate_price(params.price)?,
            latitude: validate_latitude(params.latitude)?,
            longitude: validate_longitude(params.longitude)?,
            owner_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply(&mut self, changes: &PlaceChanges) -> Result<(), AppError> {
        if let Some(title) = &changes.title {
            self.title = validate_title(title)?;
        }
        if let Some(description) = &changes.description {
            self.description = description.clone();
        }
        if let Some(price) = changes.price {
            self.price = validate_price(price)?;
        }
        if let Some(latitude) = changes.latitude {
            self.latitude = validate_latitude(latitude)?;
        }
        if let Some(longitude) = changes.longitude {
            self.longitude = validate_longitude(longitude)?;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct OwnerSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for OwnerSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct AmenitySummary {
    pub id: String,
    pub name: String,
}

impl From<Amenity> for AmenitySummary {
    fn from(amenity: Amenity) -> Self {
        Self { id: amenity.id, name: amenity.name }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct PlaceDetails {
    #[serde(flatten)]
    pub place: Place,
    pub owner: Option<OwnerSummary>,
    pub amenities: Vec<AmenitySummary>,
}

fn validate_title(raw: &str) -> Result<String, AppError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(AppError::validation("Title cannot be empty or just whitespace"));
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(AppError::validation(format!("Title must not exceed {} characters", TITLE_MAX_LEN)));
    }
    Ok(title.to_string())
}

fn validate_price(price: f64) -> Result<f64, AppError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::validation("Price must be a positive value"));
    }
    Ok(price)
}

fn validate_latitude(latitude: f64) -> Result<f64, AppError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(AppError::validation("Latitude must be between -90.0 and 90.0"));
    }
    Ok(latitude)
}

fn validate_longitude(longitude: f64) -> Result<f64, AppError> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(AppError::validation("Longitude must be between -180.0 and 180.0"));
    }
    Ok(longitude)
}
