use crate::domain::models::{
    place::{NewPlaceParams, PlaceChanges},
    review::{NewReviewParams, ReviewChanges},
    user::{NewUser, UserChanges},
};
use serde::{Deserialize, Deserializer};

// Identity fields (owner_id, user_id) are never read from a payload: serde
// drops unknown keys, and the handlers take them from the token instead.

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            is_admin: req.is_admin,
        }
    }
}

/// Keeps an explicit `null` apart from an absent key: absent is `None`
/// (through `#[serde(default)]`), `null` is `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub password: Option<Option<String>>,
    pub is_admin: Option<bool>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            is_admin: req.is_admin,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateAmenityRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct UpdateAmenityRequest {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct CreatePlaceRequest {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub amenity_ids: Vec<String>,
}

impl From<CreatePlaceRequest> for NewPlaceParams {
    fn from(req: CreatePlaceRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            price: req.price,
            latitude: req.latitude,
            longitude: req.longitude,
            amenity_ids: req.amenity_ids,
        }
    }
}

#[derive(Deserialize)]
pub struct UpdatePlaceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenity_ids: Option<Vec<String>>,
}

impl From<UpdatePlaceRequest> for PlaceChanges {
    fn from(req: UpdatePlaceRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            price: req.price,
            latitude: req.latitude,
            longitude: req.longitude,
            amenity_ids: req.amenity_ids,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub text: String,
    pub rating: i32,
    pub place_id: String,
}

impl From<CreateReviewRequest> for NewReviewParams {
    fn from(req: CreateReviewRequest) -> Self {
        Self { text: req.text, rating: req.rating, place_id: req.place_id }
    }
}

#[derive(Deserialize)]
pub struct UpdateReviewRequest {
    pub text: Option<String>,
    pub rating: Option<i32>,
}

impl From<UpdateReviewRequest> for ReviewChanges {
    fn from(req: UpdateReviewRequest) -> Self {
        Self { text: req.text, rating: req.rating }
    }
}
