//! Application-wide constants

/// Radius of the property proximity search, in kilometres.
pub const SEARCH_RADIUS_KM: f64 = 10.0;
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 900;
