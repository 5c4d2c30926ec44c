//! Geospatial query capability (port)

use async_trait::async_trait;
use crate::domain::{GeoPoint, Property};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProximitySearch: Send + Sync {
    /// Properties whose stored location lies within `radius_km` of `center`,
    /// nearest first.
    async fn near_by(&self, center: GeoPoint, radius_km: f64) -> Result<Vec<Property>, DomainError>;
}
