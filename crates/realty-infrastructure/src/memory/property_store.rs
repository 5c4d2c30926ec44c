use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use tracing::info;

use realty_core::domain::{GeoPoint, Property, PropertyImage};
use realty_core::error::DomainError;
use realty_core::repositories::{PropertyRepository, ProximitySearch};

#[derive(Default)]
pub struct MemoryPropertyRepository {
    properties: RwLock<HashMap<Uuid, Property>>,
    images: RwLock<Vec<PropertyImage>>,
}

impl MemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an image record to a stored property.
    pub async fn insert_image(&self, image: PropertyImage) -> Result<(), DomainError> {
        if !self.properties.read().await.contains_key(&image.property_id) {
            return Err(DomainError::PropertyNotFound(image.property_id));
        }
        self.images.write().await.push(image);
        Ok(())
    }
}

#[async_trait]
impl PropertyRepository for MemoryPropertyRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Property>, DomainError> {
        Ok(self.properties.read().await.get(id).cloned())
    }

    async fn create(&self, property: &Property) -> Result<Property, DomainError> {
        property.validate_location()?;
        let mut properties = self.properties.write().await;
        if properties.contains_key(&property.id) {
            return Err(DomainError::PersistenceError(format!(
                "duplicate property id {}",
                property.id
            )));
        }
        properties.insert(property.id, property.clone());
        info!("Property stored in memory: {}", property.id);
        Ok(property.clone())
    }

    async fn update(&self, property: &Property) -> Result<Property, DomainError> {
        property.validate_location()?;
        let mut properties = self.properties.write().await;
        let stored = properties
            .get_mut(&property.id)
            .ok_or(DomainError::PropertyNotFound(property.id))?;

        let owner_id = stored.owner_id;
        *stored = Property {
            owner_id,
            ..property.clone()
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        if self.properties.write().await.remove(id).is_none() {
            return Err(DomainError::PropertyNotFound(*id));
        }
        // images are owned by the property
        self.images.write().await.retain(|image| image.property_id != *id);
        Ok(())
    }

    async fn find_images(&self, property_ids: &[Uuid]) -> Result<Vec<PropertyImage>, DomainError> {
        Ok(self
            .images
            .read()
            .await
            .iter()
            .filter(|image| property_ids.contains(&image.property_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProximitySearch for MemoryPropertyRepository {
    async fn near_by(&self, center: GeoPoint, radius_km: f64) -> Result<Vec<Property>, DomainError> {
        let properties = self.properties.read().await;

        let mut matches: Vec<(f64, Property)> = properties
            .values()
            .filter_map(|property| {
                let distance = property.location()?.distance_km(&center);
                (distance <= radius_km).then(|| (distance, property.clone()))
            })
            .collect();
        matches.sort_by(|a, b| a.0.total_cmp(&b.0));

        Ok(matches.into_iter().map(|(_, property)| property).collect())
    }
}
