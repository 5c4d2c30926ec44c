//! # Realty Core - Domain Module
//! 
//! Domain entities for the realty service.

pub mod geo;
pub mod property;
pub mod property_image;
pub mod user;

// Re-export all entities
pub use geo::GeoPoint;
pub use property::{NewProperty, Property, PropertyChanges, PropertyDetails};
pub use property_image::PropertyImage;
pub use user::{NewUser, User, UserChanges};
