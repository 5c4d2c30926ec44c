use std::sync::Arc;

use realty_core::services::{PropertyService, UserService};
use realty_security::JwtService;

#[derive(Clone)]
pub struct AppState {
    pub property_service: Arc<PropertyService>,
    pub user_service: Arc<UserService>,
    pub jwt: Arc<JwtService>,
    /// Base for absolute image URLs.
    pub public_url: String,
}
