//! End-to-end service scenarios against the in-memory adapters.

use std::sync::Arc;

use realty_core::domain::{NewProperty, NewUser, PropertyChanges, PropertyImage, UserChanges};
use realty_core::services::{PropertyService, UserService};
use realty_core::DomainError;
use realty_infrastructure::{MemoryPropertyRepository, MemoryUserRepository};
use uuid::Uuid;

fn property_service(repo: &Arc<MemoryPropertyRepository>) -> PropertyService {
    PropertyService::new(repo.clone(), repo.clone())
}

fn listing(latitude: f64, longitude: f64) -> NewProperty {
    NewProperty {
        title: "Casa com quintal".to_string(),
        address: "Rua das Palmeiras, 42".to_string(),
        latitude,
        longitude,
        price: 100000.0,
    }
}

fn registration(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: email.to_string(),
        password: "segredo123".to_string(),
    }
}

#[tokio::test]
async fn test_owner_lifecycle_scenario() {
    let repo = Arc::new(MemoryPropertyRepository::new());
    let service = property_service(&repo);
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let created = service.create(owner, listing(10.0, 20.0)).await.unwrap();
    assert_eq!(created.owner_id, owner);

    let listed = service.list(Some(10.0), Some(20.0)).await.unwrap();
    assert!(listed.iter().any(|d| d.property.id == created.id));

    let denied = service.delete(stranger, &created.id).await;
    assert!(matches!(denied, Err(DomainError::Unauthorized { .. })));
    let still_there = service.get(&created.id).await.unwrap();
    assert_eq!(still_there.property, created);

    service.delete(owner, &created.id).await.unwrap();
    assert!(matches!(
        service.get(&created.id).await,
        Err(DomainError::PropertyNotFound(_))
    ));
}

#[tokio::test]
async fn test_listing_respects_radius_and_loads_images() {
    let repo = Arc::new(MemoryPropertyRepository::new());
    let service = property_service(&repo);
    let owner = Uuid::new_v4();

    let close = service.create(owner, listing(10.03, 20.03)).await.unwrap();
    let far = service.create(owner, listing(10.45, 20.0)).await.unwrap(); // ~50 km
    repo.insert_image(PropertyImage::new(close.id, "quarto.jpg".to_string()))
        .await
        .unwrap();

    let listed = service.list(Some(10.0), Some(20.0)).await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].property.id, close.id);
    assert_eq!(listed[0].images.len(), 1);
    assert_eq!(listed[0].images[0].path, "quarto.jpg");
    assert!(listed.iter().all(|d| d.property.id != far.id));

    let shown = service.get(&close.id).await.unwrap();
    assert_eq!(shown.images.len(), 1);
}

#[tokio::test]
async fn test_listing_rejects_invalid_coordinates() {
    let repo = Arc::new(MemoryPropertyRepository::new());
    let service = property_service(&repo);

    for (lat, lon) in [(None, Some(20.0)), (Some(91.0), Some(0.0)), (Some(0.0), Some(181.0))] {
        assert!(matches!(
            service.list(lat, lon).await,
            Err(DomainError::ValidationError(_))
        ));
    }
}

#[tokio::test]
async fn test_property_update_changes_only_supplied_field() {
    let repo = Arc::new(MemoryPropertyRepository::new());
    let service = property_service(&repo);
    let created = service.create(Uuid::new_v4(), listing(10.0, 20.0)).await.unwrap();

    let updated = service
        .update(
            &created.id,
            PropertyChanges {
                address: Some("Rua Nova, 7".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.address, "Rua Nova, 7");
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.latitude, created.latitude);
    assert_eq!(updated.longitude, created.longitude);
    assert_eq!(updated.price, created.price);
    assert_eq!(updated.owner_id, created.owner_id);

    assert!(matches!(
        service.update(&Uuid::new_v4(), PropertyChanges::default()).await,
        Err(DomainError::PropertyNotFound(_))
    ));
}

#[tokio::test]
async fn test_duplicate_email_leaves_user_count_unchanged() {
    let repo = Arc::new(MemoryUserRepository::new());
    let service = UserService::new(repo.clone());

    service.create(registration("ana", "ana@example.com")).await.unwrap();
    assert_eq!(repo.count().await, 1);

    let duplicate = service.create(registration("ana2", "Ana@Example.com")).await;

    assert!(matches!(duplicate, Err(DomainError::EmailAlreadyExists(_))));
    assert_eq!(repo.count().await, 1);
    assert_eq!(service.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_registrations_store_one_user() {
    let repo = Arc::new(MemoryUserRepository::new());
    let service = Arc::new(UserService::new(repo.clone()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create(registration(&format!("user{}", i), "same@example.com"))
                    .await
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(e) => assert!(matches!(e, DomainError::EmailAlreadyExists(_))),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_user_update_get_and_delete() {
    let repo = Arc::new(MemoryUserRepository::new());
    let service = UserService::new(repo.clone());
    let user = service.create(registration("bia", "bia@example.com")).await.unwrap();

    let updated = service
        .update(
            &user.id,
            UserChanges {
                username: Some("beatriz".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.username, "beatriz");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.password_hash, user.password_hash);

    service.delete(&user.id).await.unwrap();
    assert!(matches!(service.get(&user.id).await, Err(DomainError::UserNotFound(_))));
    assert!(matches!(service.delete(&user.id).await, Err(DomainError::UserNotFound(_))));
}
