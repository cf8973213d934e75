use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::error::AppError;

pub const TEXT_MAX_LEN: usize = 1000;
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Review {
    pub id: String,
    pub text: String,
    pub rating: i32,
    pub user_id: String,
    pub place_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewReviewParams {
    pub text: String,
    pub rating: i32,
    pub place_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewChanges {
    pub text: Option<String>,
    pub rating: Option<i32>,
}

impl Review {
    pub fn new(user_id: String, params: &NewReviewParams) -> Result<Self, AppError> {
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            text: validate_text(&params.text)?,
            rating: validate_rating(params.rating)?,
            user_id,
            place_id: params.place_id.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply(&mut self, changes: &ReviewChanges) -> Result<(), AppError> {
        if let Some(text) = &changes.text {
            self.text = validate_text(text)?;
        }
        if let Some(rating) = changes.rating {
            self.rating = validate_rating(rating)?;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate_text(raw: &str) -> Result<String, AppError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(AppError::validation("Review text cannot be empty or just whitespace"));
    }
    if text.chars().count() > TEXT_MAX_LEN {
        return Err(AppError::validation(format!("Review text must not exceed {} characters", TEXT_MAX_LEN)));
    }
    Ok(text.to_string())
}

fn validate_rating(rating: i32) -> Result<i32, AppError> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(AppError::validation(format!("Rating must be between {} and {}", RATING_MIN, RATING_MAX)));
    }
    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(rating: i32) -> NewReviewParams {
        NewReviewParams { text: " Lovely stay ".into(), rating, place_id: "place-1".into() }
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Review::new("u".into(), &params(0)).is_err());
        assert!(Review::new("u".into(), &params(1)).is_ok());
        assert!(Review::new("u".into(), &params(5)).is_ok());
        let err = Review::new("u".into(), &params(6)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Rating must be between 1 and 5");
    }

    #[test]
    fn test_text_rules() {
        let review = Review::new("u".into(), &params(4)).unwrap();
        assert_eq!(review.text, "Lovely stay");
        assert_eq!(review.user_id, "u");
        assert_eq!(review.place_id, "place-1");

        let mut blank = params(4);
        blank.text = "\n\t ".into();
        assert!(Review::new("u".into(), &blank).is_err());

        let mut long = params(4);
        long.text = "a".repeat(1001);
        assert!(Review::new("u".into(), &long).is_err());
    }

    #[test]
    fn test_apply_keeps_identity_fields() {
        let mut review = Review::new("u".into(), &params(3)).unwrap();
        review.apply(&ReviewChanges { text: Some("Changed".into()), rating: Some(5) }).unwrap();
        assert_eq!(review.text, "Changed");
        assert_eq!(review.rating, 5);
        assert_eq!(review.user_id, "u");
        assert_eq!(review.place_id, "place-1");
    }
}
