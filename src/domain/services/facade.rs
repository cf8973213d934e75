use std::sync::Arc;
use crate::domain::{
    models::{
        amenity::{self, Amenity},
        place::{NewPlaceParams, OwnerSummary, Place, PlaceChanges, PlaceDetails},
        review::{NewReviewParams, Review, ReviewChanges},
        user::{self, NewUser, User, UserChanges},
    },
    ports::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository},
    services::auth_service::{hash_password, verify_password},
};
use crate::error::AppError;
use chrono::Utc;
use tracing::{debug, info};

/// Single entry point in front of the per-entity repositories.
///
/// Owns entity validation and the data-level business rules (unique email,
/// unique amenity name, one review per user and place). Caller-specific
/// authorization lives in `permissions` and is applied by the handlers.
pub struct HbnbFacade {
    users: Arc<dyn UserRepository>,
    places: Arc<dyn PlaceRepository>,
    reviews: Arc<dyn ReviewRepository>,
    amenities: Arc<dyn AmenityRepository>,
}

impl HbnbFacade {
    pub fn new(
        users: Arc<dyn UserRepository>,
        places: Arc<dyn PlaceRepository>,
        reviews: Arc<dyn ReviewRepository>,
        amenities: Arc<dyn AmenityRepository>,
    ) -> Self {
        Self { users, places, reviews, amenities }
    }

    // ---- users ----

    pub async fn create_user(&self, input: NewUser) -> Result<User, AppError> {
        let first_name = user::validate_name(&input.first_name, "First name")?;
        let last_name = user::validate_name(&input.last_name, "Last name")?;
        let email = user::validate_email(&input.email)?;
        user::validate_password(&input.password)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::validation("Email already registered"));
        }

        let password_hash = hash_password(&input.password)?;
        let created = self.users
            .create(&User::new(first_name, last_name, email, password_hash, input.is_admin))
            .await?;

        info!("Created user: {} (admin: {})", created.id, created.is_admin);
        Ok(created)
    }

    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        self.users.find_by_id(id).await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.users.find_by_email(&user::normalize_email(email)).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.users.list().await
    }

    pub async fn update_user(&self, id: &str, changes: UserChanges) -> Result<User, AppError> {
        let mut target = self.get_user(id).await?;

        if let Some(first_name) = &changes.first_name {
            target.first_name = user::validate_name(first_name, "First name")?;
        }
        if let Some(last_name) = &changes.last_name {
            target.last_name = user::validate_name(last_name, "Last name")?;
        }
        if let Some(email) = &changes.email {
            let email = user::validate_email(email.as_deref().unwrap_or_default())?;
            if let Some(existing) = self.users.find_by_email(&email).await? {
                if existing.id != target.id {
                    return Err(AppError::validation("Email already in use"));
                }
            }
            target.email = email;
        }
        if let Some(password) = &changes.password {
            let password = password.as_deref().unwrap_or_default();
            user::validate_password(password)?;
            target.password_hash = hash_password(password)?;
        }
        if let Some(is_admin) = changes.is_admin {
            target.is_admin = is_admin;
        }
        target.updated_at = Utc::now();

        let updated = self.users.update(&target).await?;
        info!("Updated user: {}", updated.id);
        Ok(updated)
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let target = self.get_user(id).await?;
        self.users.delete(&target.id).await?;
        info!("Deleted user {} with their places and reviews", target.id);
        Ok(())
    }

    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let found = self.get_user_by_email(email).await?;
        match found {
            Some(user) if verify_password(password, &user.password_hash) => Ok(user),
            _ => {
                debug!("Failed login attempt for {}", user::normalize_email(email));
                Err(AppError::InvalidCredentials)
            }
        }
    }

    // ---- amenities ----

    pub async fn create_amenity(&self, name: &str) -> Result<Amenity, AppError> {
        let amenity = Amenity::new(name)?;
        if self.amenities.find_by_name(&amenity.name).await?.is_some() {
            return Err(AppError::validation("Amenity name already exists"));
        }
        let created = self.amenities.create(&amenity).await?;
        info!("Created amenity: {} ({})", created.name, created.id);
        Ok(created)
    }

    pub async fn get_amenity(&self, id: &str) -> Result<Amenity, AppError> {
        self.amenities.find_by_id(id).await?
            .ok_or_else(|| AppError::NotFound("Amenity not found".into()))
    }

    pub async fn list_amenities(&self) -> Result<Vec<Amenity>, AppError> {
        self.amenities.list().await
    }

    pub async fn update_amenity(&self, id: &str, name: Option<String>) -> Result<Amenity, AppError> {
        let mut target = self.get_amenity(id).await?;
        if let Some(name) = name {
            let name = amenity::validate_name(&name)?;
            if let Some(existing) = self.amenities.find_by_name(&name).await? {
                if existing.id != target.id {
                    return Err(AppError::validation("Amenity name already exists"));
                }
            }
            target.name = name;
        }
        target.updated_at = Utc::now();

        let updated = self.amenities.update(&target).await?;
        info!("Updated amenity: {} ({})", updated.name, updated.id);
        Ok(updated)
    }

    pub async fn delete_amenity(&self, id: &str) -> Result<(), AppError> {
        let target = self.get_amenity(id).await?;
        self.amenities.delete(&target.id).await?;
        info!("Deleted amenity: {}", target.id);
        Ok(())
    }

    // ---- places ----

    pub async fn create_place(&self, owner_id: &str, params: NewPlaceParams) -> Result<PlaceDetails, AppError> {
        if self.users.find_by_id(owner_id).await?.is_none() {
            return Err(AppError::validation("Owner not found"));
        }
        let place = Place::new(owner_id.to_string(), &params)?;
        let amenity_ids = self.resolve_amenities(&params.amenity_ids).await?;

        let created = self.places.create(&place, &amenity_ids).await?;
        info!("Created place: {} owned by {}", created.id, created.owner_id);
        self.details(created).await
    }

    pub async fn get_place(&self, id: &str) -> Result<Place, AppError> {
        self.places.find_by_id(id).await?
            .ok_or_else(|| AppError::NotFound("Place not found".into()))
    }

    pub async fn get_place_details(&self, id: &str) -> Result<PlaceDetails, AppError> {
        let place = self.get_place(id).await?;
        self.details(place).await
    }

    pub async fn list_places(&self) -> Result<Vec<Place>, AppError> {
        self.places.list().await
    }

    pub async fn update_place(&self, id: &str, changes: PlaceChanges) -> Result<PlaceDetails, AppError> {
        let mut place = self.get_place(id).await?;
        place.apply(&changes)?;

        let amenity_ids = match &changes.amenity_ids {
            Some(ids) => Some(self.resolve_amenities(ids).await?),
            None => None,
        };

        let updated = self.places.update(&place, amenity_ids.as_deref()).await?;
        info!("Updated place: {}", updated.id);
        self.details(updated).await
    }

    pub async fn delete_place(&self, id: &str) -> Result<(), AppError> {
        let place = self.get_place(id).await?;
        self.places.delete(&place.id).await?;
        info!("Deleted place {} with its reviews", place.id);
        Ok(())
    }

    async fn details(&self, place: Place) -> Result<PlaceDetails, AppError> {
        let owner = self.users.find_by_id(&place.owner_id).await?;
        let amenities = self.places.list_amenities(&place.id).await?;
        Ok(PlaceDetails {
            owner: owner.as_ref().map(OwnerSummary::from),
            amenities: amenities.into_iter().map(Into::into).collect(),
            place,
        })
    }

    /// Every id must exist; duplicates collapse to one link.
    async fn resolve_amenities(&self, ids: &[String]) -> Result<Vec<String>, AppError> {
        let mut resolved: Vec<String> = Vec::with_capacity(ids.len());
        for id in ids {
            if resolved.contains(id) {
                continue;
            }
            if self.amenities.find_by_id(id).await?.is_none() {
                return Err(AppError::validation(format!("Amenity {} not found", id)));
            }
            resolved.push(id.clone());
        }
        Ok(resolved)
    }

    // ---- reviews ----

    pub async fn create_review(&self, author_id: &str, params: NewReviewParams) -> Result<Review, AppError> {
        if self.users.find_by_id(author_id).await?.is_none() {
            return Err(AppError::validation("User not found"));
        }
        let place = self.get_place(&params.place_id).await?;
        if self.reviews.find_by_user_and_place(author_id, &place.id).await?.is_some() {
            return Err(AppError::validation("You have already reviewed this place"));
        }

        let review = Review::new(author_id.to_string(), &params)?;
        let created = self.reviews.create(&review).await?;
        info!("Created review: {} on place {}", created.id, created.place_id);
        Ok(created)
    }

    pub async fn get_review(&self, id: &str) -> Result<Review, AppError> {
        self.reviews.find_by_id(id).await?
            .ok_or_else(|| AppError::NotFound("Review not found".into()))
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>, AppError> {
        self.reviews.list().await
    }

    pub async fn list_reviews_by_place(&self, place_id: &str) -> Result<Vec<Review>, AppError> {
        let place = self.get_place(place_id).await?;
        self.reviews.list_by_place(&place.id).await
    }

    pub async fn update_review(&self, id: &str, changes: ReviewChanges) -> Result<Review, AppError> {
        let mut review = self.get_review(id).await?;
        review.apply(&changes)?;
        let updated = self.reviews.update(&review).await?;
        info!("Updated review: {}", updated.id);
        Ok(updated)
    }

    pub async fn delete_review(&self, id: &str) -> Result<(), AppError> {
        let review = self.get_review(id).await?;
        self.reviews.delete(&review.id).await?;
        info!("Deleted review: {}", review.id);
        Ok(())
    }
}
