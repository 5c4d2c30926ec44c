//! Domain services (business logic)

pub mod property_service;
pub mod user_service;

pub use property_service::PropertyService;
pub use user_service::UserService;
