pub mod amenity;
pub mod auth;
pub mod place;
pub mod review;
pub mod user;
