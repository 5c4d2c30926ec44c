// ============================================================================
// Realty Infrastructure - PostgreSQL Property Repository
// File: crates/realty-infrastructure/src/database/postgres/property_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use tracing::{info, error};
use chrono::{DateTime, Utc};

use realty_core::domain::{GeoPoint, Property, PropertyImage};
use realty_core::error::DomainError;
use realty_core::repositories::{PropertyRepository, ProximitySearch};
use realty_shared::constants::EARTH_RADIUS_KM;

pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct PropertyRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PropertyRow> for Property {
    fn from(row: PropertyRow) -> Self {
        Property {
            id: row.id,
            owner_id: row.user_id,
            title: row.title,
            address: row.address,
            latitude: row.latitude,
            longitude: row.longitude,
            price: row.price,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct ImageRow {
    pub id: Uuid,
    pub property_id: Uuid,
    pub path: String,
    pub created_at: DateTime<Utc>,
}

impl From<ImageRow> for PropertyImage {
    fn from(row: ImageRow) -> Self {
        PropertyImage {
            id: row.id,
            property_id: row.property_id,
            path: row.path,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Property>, DomainError> {
        let row: Option<PropertyRow> = sqlx::query_as(
            r#"
            SELECT
                id, user_id, title, address,
                latitude, longitude, price,
                created_at, updated_at
            FROM properties
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding property by id: {}", e);
            DomainError::QueryError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, property: &Property) -> Result<Property, DomainError> {
        let row: PropertyRow = sqlx::query_as(
            r#"
            INSERT INTO properties (
                id, user_id, title, address,
                latitude, longitude, price,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING
                id, user_id, title, address,
                latitude, longitude, price,
                created_at, updated_at
            "#
        )
        .bind(property.id)
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.address)
        .bind(property.latitude)
        .bind(property.longitude)
        .bind(property.price)
        .bind(property.created_at)
        .bind(property.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating property: {}", e);
            map_write_error(e)
        })?;

        info!("Property row inserted: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, property: &Property) -> Result<Property, DomainError> {
        // user_id is never part of SET
        let row: Option<PropertyRow> = sqlx::query_as(
            r#"
            UPDATE properties
            SET
                title = $2,
                address = $3,
                latitude = $4,
                longitude = $5,
                price = $6,
                updated_at = $7
            WHERE id = $1
            RETURNING
                id, user_id, title, address,
                latitude, longitude, price,
                created_at, updated_at
            "#
        )
        .bind(property.id)
        .bind(&property.title)
        .bind(&property.address)
        .bind(property.latitude)
        .bind(property.longitude)
        .bind(property.price)
        .bind(property.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating property: {}", e);
            map_write_error(e)
        })?;

        row.map(|r| r.into())
            .ok_or(DomainError::PropertyNotFound(property.id))
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM properties
            WHERE id = $1
            "#
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error deleting property: {}", e);
            DomainError::PersistenceError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PropertyNotFound(*id));
        }

        Ok(())
    }

    async fn find_images(&self, property_ids: &[Uuid]) -> Result<Vec<PropertyImage>, DomainError> {
        if property_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<ImageRow> = sqlx::query_as(
            r#"
            SELECT id, property_id, path, created_at
            FROM images
            WHERE property_id = ANY($1)
            ORDER BY created_at ASC
            "#
        )
        .bind(property_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error loading property images: {}", e);
            DomainError::QueryError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}

#[async_trait]
impl ProximitySearch for PgPropertyRepository {
    async fn near_by(&self, center: GeoPoint, radius_km: f64) -> Result<Vec<Property>, DomainError> {
        // Spherical law of cosines; the clamp keeps ACOS inside its domain when
        // a row sits exactly on the center point.
        let rows: Vec<PropertyRow> = sqlx::query_as(
            r#"
            SELECT
                id, user_id, title, address,
                latitude, longitude, price,
                created_at, updated_at
            FROM (
                SELECT
                    p.*,
                    $3 * ACOS(LEAST(1.0, GREATEST(-1.0,
                        COS(RADIANS($1)) * COS(RADIANS(p.latitude))
                            * COS(RADIANS(p.longitude) - RADIANS($2))
                        + SIN(RADIANS($1)) * SIN(RADIANS(p.latitude))
                    ))) AS distance
                FROM properties p
            ) AS candidates
            WHERE distance <= $4
            ORDER BY distance ASC
            "#
        )
        .bind(center.latitude())
        .bind(center.longitude())
        .bind(EARTH_RADIUS_KM)
        .bind(radius_km)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error in proximity search: {}", e);
            DomainError::QueryError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}

/// `properties` carries CHECK constraints on latitude and longitude; a
/// violation means the coordinates are not a valid point.
fn map_write_error(e: sqlx::Error) -> DomainError {
    let is_check_violation = e
        .as_database_error()
        .map(|db| db.is_check_violation())
        .unwrap_or(false);

    if is_check_violation {
        DomainError::ValidationError(format!("invalid coordinates: {}", e))
    } else {
        DomainError::PersistenceError(e.to_string())
    }
}
