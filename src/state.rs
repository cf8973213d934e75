use std::sync::Arc;
use crate::domain::services::{auth_service::AuthService, facade::HbnbFacade};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub facade: Arc<HbnbFacade>,
    pub auth_service: Arc<AuthService>,
}
