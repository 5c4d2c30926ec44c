//! HTTP handlers

pub mod health;
pub mod properties;
pub mod users;

use uuid::Uuid;

use crate::error::ApiError;
use crate::messages::Operation;

/// An id that is not a UUID cannot match any record.
pub(crate) fn parse_id(operation: Operation, raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidId {
        operation,
        raw: raw.to_string(),
    })
}
