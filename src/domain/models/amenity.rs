use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::error::AppError;

pub const NAME_MAX_LEN: usize = 50;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Amenity {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Amenity {
    pub fn new(name: &str) -> Result<Self, AppError> {
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: validate_name(name)?,
            created_at: now,
            updated_at: now,
        })
    }
}

pub fn validate_name(raw: &str) -> Result<String, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::validation("Amenity name cannot be empty"));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(AppError::validation(format!("Amenity name must be less than {} characters", NAME_MAX_LEN)));
    }
    Ok(name.to_string())
}
