//! Property repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{Property, PropertyImage};
use crate::error::DomainError;

/// Reads fail with `QueryError`, writes with `PersistenceError`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Property>, DomainError>;
    async fn create(&self, property: &Property) -> Result<Property, DomainError>;
    async fn update(&self, property: &Property) -> Result<Property, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;

    /// Loads the images of every property in `property_ids` in one round trip.
    async fn find_images(&self, property_ids: &[Uuid]) -> Result<Vec<PropertyImage>, DomainError>;
}
