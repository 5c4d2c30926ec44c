//! Domain errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Property not found: {0}")]
    PropertyNotFound(Uuid),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("User {actor} is not the owner of property {property_id}")]
    Unauthorized { actor: Uuid, property_id: Uuid },

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Persistence error: {0}")]
    PersistenceError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
