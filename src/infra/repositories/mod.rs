pub mod sqlite_amenity_repo;
pub mod sqlite_place_repo;
pub mod sqlite_review_repo;
pub mod sqlite_user_repo;
