pub mod auth_service;
pub mod facade;
pub mod permissions;
