// ============================================================================
// Realty Core - Property Entity
// File: crates/realty-core/src/domain/property.rs
// Description: Property listing owned by a user
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

use super::geo::GeoPoint;
use super::property_image::PropertyImage;

/// Property entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    /// Set once from the authenticated actor; never changed afterwards.
    pub owner_id: Uuid,
    pub title: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when storing a new property.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub title: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price: f64,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyChanges {
    pub title: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price: Option<f64>,
}

/// Property with its images attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDetails {
    #[serde(flatten)]
    pub property: Property,
    pub images: Vec<PropertyImage>,
}

impl Property {
    /// Create new property owned by `owner_id`
    pub fn new(owner_id: Uuid, fields: NewProperty) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title: fields.title,
            address: fields.address,
            latitude: fields.latitude,
            longitude: fields.longitude,
            price: fields.price,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, actor: &Uuid) -> bool {
        self.owner_id == *actor
    }

    /// Stored location, if the coordinates form a valid point.
    pub fn location(&self) -> Option<GeoPoint> {
        GeoPoint::new(self.latitude, self.longitude).ok()
    }

    /// Fails with `ValidationError` when the stored coordinates are not a
    /// valid point. Stores call this before writing.
    pub fn validate_location(&self) -> Result<GeoPoint, DomainError> {
        GeoPoint::new(self.latitude, self.longitude)
    }

    pub fn with_images(self, images: Vec<PropertyImage>) -> PropertyDetails {
        PropertyDetails { property: self, images }
    }
}

impl PropertyChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.address.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.price.is_none()
    }

    /// Merge the supplied fields into `property`.
    pub fn apply(self, property: &mut Property) {
        if let Some(title) = self.title {
            property.title = title;
        }
        if let Some(address) = self.address {
            property.address = address;
        }
        if let Some(latitude) = self.latitude {
            property.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            property.longitude = longitude;
        }
        if let Some(price) = self.price {
            property.price = price;
        }
        property.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Property {
        Property::new(
            Uuid::new_v4(),
            NewProperty {
                title: "Casa na praia".to_string(),
                address: "Rua das Flores, 10".to_string(),
                latitude: 10.0,
                longitude: 20.0,
                price: 100000.0,
            },
        )
    }

    #[test]
    fn test_apply_changes_only_supplied_fields() {
        let mut property = sample();
        let before = property.clone();

        PropertyChanges {
            price: Some(250000.0),
            ..Default::default()
        }
        .apply(&mut property);

        assert_eq!(property.price, 250000.0);
        assert_eq!(property.title, before.title);
        assert_eq!(property.address, before.address);
        assert_eq!(property.latitude, before.latitude);
        assert_eq!(property.longitude, before.longitude);
        assert_eq!(property.owner_id, before.owner_id);
        assert_eq!(property.created_at, before.created_at);
        assert!(property.updated_at >= before.updated_at);
    }

    #[test]
    fn test_ownership() {
        let property = sample();
        assert!(property.is_owned_by(&property.owner_id));
        assert!(!property.is_owned_by(&Uuid::new_v4()));
    }

    #[test]
    fn test_details_serialize_flat() {
        let property = sample();
        let id = property.id;
        let json = serde_json::to_value(property.with_images(vec![])).unwrap();
        assert_eq!(json["id"], serde_json::json!(id));
        assert!(json["images"].as_array().unwrap().is_empty());
    }
}
