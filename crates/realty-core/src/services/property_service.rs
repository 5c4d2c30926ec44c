// ============================================================================
// Realty Core - Property Service
// File: crates/realty-core/src/services/property_service.rs
// ============================================================================
//! Property CRUD and proximity listing

use std::collections::HashMap;
use std::sync::Arc;
use realty_shared::constants::SEARCH_RADIUS_KM;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{GeoPoint, NewProperty, Property, PropertyChanges, PropertyDetails, PropertyImage};
use crate::error::DomainError;
use crate::repositories::{PropertyRepository, ProximitySearch};

/// Property service. Every mutation writes through to the repository.
pub struct PropertyService {
    property_repo: Arc<dyn PropertyRepository>,
    proximity: Arc<dyn ProximitySearch>,
    search_radius_km: f64,
}

impl PropertyService {
    pub fn new(property_repo: Arc<dyn PropertyRepository>, proximity: Arc<dyn ProximitySearch>) -> Self {
        Self {
            property_repo,
            proximity,
            search_radius_km: SEARCH_RADIUS_KM,
        }
    }

    /// List properties within the search radius of the given coordinate,
    /// nearest first, with their images attached.
    pub async fn list(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Vec<PropertyDetails>, DomainError> {
        let center = GeoPoint::from_optional(latitude, longitude).map_err(|e| {
            warn!("Rejected proximity search: {}", e);
            e
        })?;

        let properties = self.proximity.near_by(center, self.search_radius_km).await?;
        info!(
            "Proximity search at ({}, {}) matched {} properties",
            center.latitude(),
            center.longitude(),
            properties.len()
        );

        self.attach_images(properties).await
    }

    /// Store a new property owned by `actor`.
    pub async fn create(&self, actor: Uuid, fields: NewProperty) -> Result<Property, DomainError> {
        let property = Property::new(actor, fields);
        let created = self.property_repo.create(&property).await?;

        info!("Property {} created by user {}", created.id, actor);
        Ok(created)
    }

    pub async fn get(&self, id: &Uuid) -> Result<PropertyDetails, DomainError> {
        let property = self.find_or_fail(id).await?;
        let images = self.property_repo.find_images(&[property.id]).await?;
        Ok(property.with_images(images))
    }

    /// Merge the supplied fields into the stored property and save it.
    pub async fn update(&self, id: &Uuid, changes: PropertyChanges) -> Result<Property, DomainError> {
        let mut property = self.find_or_fail(id).await?;

        if changes.is_empty() {
            return Ok(property);
        }

        changes.apply(&mut property);
        let updated = self.property_repo.update(&property).await?;

        info!("Property {} updated", updated.id);
        Ok(updated)
    }

    /// Delete a property. Only its owner may do so.
    pub async fn delete(&self, actor: Uuid, id: &Uuid) -> Result<(), DomainError> {
        let property = self.find_or_fail(id).await?;

        if !property.is_owned_by(&actor) {
            warn!("User {} tried to delete property {} owned by {}", actor, id, property.owner_id);
            return Err(DomainError::Unauthorized { actor, property_id: property.id });
        }

        self.property_repo.delete(&property.id).await?;

        info!("Property {} deleted by owner {}", id, actor);
        Ok(())
    }

    async fn find_or_fail(&self, id: &Uuid) -> Result<Property, DomainError> {
        self.property_repo.find_by_id(id).await?.ok_or_else(|| {
            warn!("Property not found: {}", id);
            DomainError::PropertyNotFound(*id)
        })
    }

    async fn attach_images(&self, properties: Vec<Property>) -> Result<Vec<PropertyDetails>, DomainError> {
        if properties.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = properties.iter().map(|p| p.id).collect();
        let mut by_property: HashMap<Uuid, Vec<PropertyImage>> = HashMap::new();
        for image in self.property_repo.find_images(&ids).await? {
            by_property.entry(image.property_id).or_default().push(image);
        }

        Ok(properties
            .into_iter()
            .map(|p| {
                let images = by_property.remove(&p.id).unwrap_or_default();
                p.with_images(images)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockPropertyRepository, MockProximitySearch};

    fn new_fields() -> NewProperty {
        NewProperty {
            title: "Apartamento".to_string(),
            address: "Av. Paulista, 1000".to_string(),
            latitude: 10.0,
            longitude: 20.0,
            price: 100000.0,
        }
    }

    fn service(repo: MockPropertyRepository, proximity: MockProximitySearch) -> PropertyService {
        PropertyService::new(Arc::new(repo), Arc::new(proximity))
    }

    #[tokio::test]
    async fn test_create_sets_owner_from_actor() {
        let actor = Uuid::new_v4();
        let mut repo = MockPropertyRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|p| Ok(p.clone()));

        let created = service(repo, MockProximitySearch::new())
            .create(actor, new_fields())
            .await
            .unwrap();

        assert_eq!(created.owner_id, actor);
        assert_eq!(created.title, "Apartamento");
    }

    #[tokio::test]
    async fn test_create_propagates_persistence_error() {
        let mut repo = MockPropertyRepository::new();
        repo.expect_create()
            .returning(|_| Err(DomainError::PersistenceError("connection reset".to_string())));

        let result = service(repo, MockProximitySearch::new())
            .create(Uuid::new_v4(), new_fields())
            .await;

        assert!(matches!(result, Err(DomainError::PersistenceError(_))));
    }

    #[tokio::test]
    async fn test_list_rejects_missing_coordinates_without_querying() {
        let mut proximity = MockProximitySearch::new();
        proximity.expect_near_by().times(0);

        let result = service(MockPropertyRepository::new(), proximity)
            .list(Some(10.0), None)
            .await;

        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_list_uses_fixed_radius_and_attaches_images() {
        let near = Property::new(Uuid::new_v4(), new_fields());
        let other = Property::new(Uuid::new_v4(), new_fields());
        let image = PropertyImage::new(near.id, "fachada.jpg".to_string());

        let mut proximity = MockProximitySearch::new();
        let found = vec![near.clone(), other.clone()];
        proximity
            .expect_near_by()
            .withf(|center, radius| {
                center.latitude() == 10.0 && center.longitude() == 20.0 && *radius == SEARCH_RADIUS_KM
            })
            .times(1)
            .returning(move |_, _| Ok(found.clone()));

        let mut repo = MockPropertyRepository::new();
        let images = vec![image.clone()];
        repo.expect_find_images()
            .times(1)
            .returning(move |_| Ok(images.clone()));

        let listed = service(repo, proximity).list(Some(10.0), Some(20.0)).await.unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].property.id, near.id);
        assert_eq!(listed[0].images, vec![image]);
        assert_eq!(listed[1].property.id, other.id);
        assert!(listed[1].images.is_empty());
    }

    #[tokio::test]
    async fn test_list_maps_query_fault() {
        let mut proximity = MockProximitySearch::new();
        proximity
            .expect_near_by()
            .returning(|_, _| Err(DomainError::QueryError("timeout".to_string())));

        let result = service(MockPropertyRepository::new(), proximity)
            .list(Some(10.0), Some(20.0))
            .await;

        assert!(matches!(result, Err(DomainError::QueryError(_))));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let mut repo = MockPropertyRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let id = Uuid::new_v4();
        let result = service(repo, MockProximitySearch::new()).get(&id).await;

        assert!(matches!(result, Err(DomainError::PropertyNotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_update_merges_supplied_fields() {
        let stored = Property::new(Uuid::new_v4(), new_fields());
        let id = stored.id;

        let mut repo = MockPropertyRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_update()
            .times(1)
            .returning(|p| Ok(p.clone()));

        let updated = service(repo, MockProximitySearch::new())
            .update(
                &id,
                PropertyChanges {
                    title: Some("Cobertura".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Cobertura");
        assert_eq!(updated.address, "Av. Paulista, 1000");
        assert_eq!(updated.price, 100000.0);
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_is_rejected() {
        let owner = Uuid::new_v4();
        let stored = Property::new(owner, new_fields());
        let id = stored.id;

        let mut repo = MockPropertyRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_delete().times(0);

        let intruder = Uuid::new_v4();
        let result = service(repo, MockProximitySearch::new()).delete(intruder, &id).await;

        assert!(matches!(
            result,
            Err(DomainError::Unauthorized { actor, property_id }) if actor == intruder && property_id == id
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repo = MockPropertyRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_delete().times(0);

        let id = Uuid::new_v4();
        let result = service(repo, MockProximitySearch::new())
            .delete(Uuid::new_v4(), &id)
            .await;

        assert!(matches!(result, Err(DomainError::PropertyNotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_delete_by_owner() {
        let owner = Uuid::new_v4();
        let stored = Property::new(owner, new_fields());
        let id = stored.id;

        let mut repo = MockPropertyRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_delete()
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo, MockProximitySearch::new()).delete(owner, &id).await.is_ok());
    }
}
