//! Property image entity (association loaded together with a property)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyImage {
    pub id: Uuid,
    pub property_id: Uuid,
    /// File name relative to the public images location.
    pub path: String,
    pub created_at: DateTime<Utc>,
}

impl PropertyImage {
    pub fn new(property_id: Uuid, path: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id,
            path,
            created_at: Utc::now(),
        }
    }

    /// Absolute URL under `{base_url}/images/`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/images/{}", base_url.trim_end_matches('/'), self.path)
    }
}
