//! Storage wiring: picks the adapter named in `database.backend`.

use std::sync::Arc;
use tracing::info;

use realty_core::repositories::{PropertyRepository, ProximitySearch, UserRepository};
use realty_shared::config::{DatabaseSettings, StorageBackend};

use crate::database::{create_pool, PgPropertyRepository, PgUserRepository};
use crate::memory::{MemoryPropertyRepository, MemoryUserRepository};

/// Repository handles injected into the services.
#[derive(Clone)]
pub struct Repositories {
    pub properties: Arc<dyn PropertyRepository>,
    pub proximity: Arc<dyn ProximitySearch>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        let properties = Arc::new(MemoryPropertyRepository::new());
        Self {
            properties: properties.clone(),
            proximity: properties,
            users: Arc::new(MemoryUserRepository::new()),
        }
    }

    pub fn postgres(pool: sqlx::PgPool) -> Self {
        let properties = Arc::new(PgPropertyRepository::new(pool.clone()));
        Self {
            properties: properties.clone(),
            proximity: properties,
            users: Arc::new(PgUserRepository::new(pool)),
        }
    }
}

pub async fn connect(settings: &DatabaseSettings) -> Result<Repositories, sqlx::Error> {
    match settings.backend {
        StorageBackend::Postgres => {
            info!("Connecting to PostgreSQL (max {} connections)...", settings.max_connections);
            let pool = create_pool(settings).await?;
            info!("Database connection established.");
            Ok(Repositories::postgres(pool))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage; data is lost on shutdown.");
            Ok(Repositories::in_memory())
        }
    }
}
