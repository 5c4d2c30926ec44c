//! Request and response payloads

use chrono::{DateTime, Utc};
use realty_core::domain::{
    NewProperty, NewUser, Property, PropertyChanges, PropertyDetails, PropertyImage, User, UserChanges,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `GET /properties?latitude=..&longitude=..`
#[derive(Debug, Deserialize)]
pub struct NearByQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Unknown fields such as `user_id` are ignored; the owner always comes
/// from the bearer token.
#[derive(Debug, Deserialize)]
pub struct CreatePropertyRequest {
    pub title: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePropertyRequest {
    pub title: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<CreatePropertyRequest> for NewProperty {
    fn from(req: CreatePropertyRequest) -> Self {
        NewProperty {
            title: req.title,
            address: req.address,
            latitude: req.latitude,
            longitude: req.longitude,
            price: req.price,
        }
    }
}

impl From<UpdatePropertyRequest> for PropertyChanges {
    fn from(req: UpdatePropertyRequest) -> Self {
        PropertyChanges {
            title: req.title,
            address: req.address,
            latitude: req.latitude,
            longitude: req.longitude,
            price: req.price,
        }
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            username: req.username,
            email: req.email,
            password: req.password,
        }
    }
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        UserChanges {
            username: req.username,
            email: req.email,
            password: req.password,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImageDto {
    pub id: Uuid,
    pub path: String,
    pub url: String,
}

impl ImageDto {
    pub fn new(image: &PropertyImage, public_url: &str) -> Self {
        Self {
            id: image.id,
            path: image.path.clone(),
            url: image.url(public_url),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PropertyDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageDto>>,
}

impl From<Property> for PropertyDto {
    fn from(p: Property) -> Self {
        Self {
            id: p.id,
            user_id: p.owner_id,
            title: p.title,
            address: p.address,
            latitude: p.latitude,
            longitude: p.longitude,
            price: p.price,
            created_at: p.created_at,
            updated_at: p.updated_at,
            images: None,
        }
    }
}

impl PropertyDto {
    pub fn with_images(details: PropertyDetails, public_url: &str) -> Self {
        let images = details
            .images
            .iter()
            .map(|image| ImageDto::new(image, public_url))
            .collect();
        Self {
            images: Some(images),
            ..PropertyDto::from(details.property)
        }
    }
}

/// User as exposed over HTTP; the password hash never leaves the service.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: &str) -> Self {
        Self { message: message.to_string() }
    }
}
