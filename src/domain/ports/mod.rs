use crate::domain::models::{
    amenity::Amenity, place::Place, review::Review, user::User,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Inserts the place and its amenity links in one transaction.
    async fn create(&self, place: &Place, amenity_ids: &[String]) -> Result<Place, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Place>, AppError>;
    async fn list(&self) -> Result<Vec<Place>, AppError>;
    /// `Some(ids)` replaces the amenity links, `None` leaves them alone.
    async fn update(&self, place: &Place, amenity_ids: Option<&[String]>) -> Result<Place, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn list_amenities(&self, place_id: &str) -> Result<Vec<Amenity>, AppError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &Review) -> Result<Review, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Review>, AppError>;
    async fn find_by_user_and_place(&self, user_id: &str, place_id: &str) -> Result<Option<Review>, AppError>;
    async fn list(&self) -> Result<Vec<Review>, AppError>;
    async fn list_by_place(&self, place_id: &str) -> Result<Vec<Review>, AppError>;
    async fn update(&self, review: &Review) -> Result<Review, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AmenityRepository: Send + Sync {
    async fn create(&self, amenity: &Amenity) -> Result<Amenity, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Amenity>, AppError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Amenity>, AppError>;
    async fn list(&self) -> Result<Vec<Amenity>, AppError>;
    async fn update(&self, amenity: &Amenity) -> Result<Amenity, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
