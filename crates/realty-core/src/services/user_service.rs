// ============================================================================
// Realty Core - User Service
// File: crates/realty-core/src/services/user_service.rs
// ============================================================================
//! User CRUD with email uniqueness

use std::sync::Arc;
use realty_security::PasswordService;
use realty_shared::utils::mask_email;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{NewUser, User, UserChanges};
use crate::error::DomainError;
use crate::repositories::UserRepository;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.user_repo.find_all().await
    }

    /// Register a new user.
    ///
    /// The email lookup only gives early feedback; the repository's unique
    /// constraint is what actually prevents duplicates under concurrency.
    pub async fn create(&self, fields: NewUser) -> Result<User, DomainError> {
        let fields = fields.normalized();
        fields.validate()?;

        info!("Registration attempt for email: {}", mask_email(&fields.email));

        if self.user_repo.find_by_email(&fields.email).await?.is_some() {
            warn!("Registration failed: email already exists: {}", mask_email(&fields.email));
            return Err(DomainError::EmailAlreadyExists(fields.email));
        }

        let password_hash = hash_password(fields.password.clone()).await?;
        let user = User::new(fields.username, fields.email, password_hash);
        let created = self.user_repo.create(&user).await?;

        info!("User {} registered", created.id);
        Ok(created)
    }

    pub async fn get(&self, id: &Uuid) -> Result<User, DomainError> {
        self.find_or_fail(id).await
    }

    /// Merge the supplied fields into the stored user and save it.
    pub async fn update(&self, id: &Uuid, changes: UserChanges) -> Result<User, DomainError> {
        let mut user = self.find_or_fail(id).await?;

        let changes = changes.normalized();
        changes.validate()?;

        if let Some(email) = changes.email.as_deref().filter(|e| *e != user.email) {
            if let Some(other) = self.user_repo.find_by_email(email).await? {
                if other.id != user.id {
                    warn!("Update of user {} rejected: email already exists: {}", id, mask_email(email));
                    return Err(DomainError::EmailAlreadyExists(email.to_string()));
                }
            }
        }

        let password_hash = match changes.password.clone() {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };
        changes.apply(&mut user, password_hash);
        let updated = self.user_repo.update(&user).await?;

        info!("User {} updated", updated.id);
        Ok(updated)
    }

    /// Delete a user. Any caller may delete any user.
    pub async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let user = self.find_or_fail(id).await?;
        self.user_repo.delete(&user.id).await?;

        info!("User {} deleted", id);
        Ok(())
    }

    async fn find_or_fail(&self, id: &Uuid) -> Result<User, DomainError> {
        self.user_repo.find_by_id(id).await?.ok_or_else(|| {
            warn!("User not found: {}", id);
            DomainError::UserNotFound(*id)
        })
    }
}

/// Argon2 hashing on the blocking pool.
async fn hash_password(password: String) -> Result<String, DomainError> {
    tokio::task::spawn_blocking(move || PasswordService::hash(&password))
        .await
        .map_err(|e| DomainError::PasswordHashError(e.to_string()))?
        .map_err(|e| DomainError::PasswordHashError(e.to_string()))
}
