use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use tracing::info;

use realty_core::domain::User;
use realty_core::error::DomainError;
use realty_core::repositories::UserRepository;

#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

/// Unique index on email; must be called while holding the write lock.
fn ensure_email_free(users: &HashMap<Uuid, User>, user: &User) -> Result<(), DomainError> {
    let taken = users
        .values()
        .any(|other| other.id != user.id && other.email.eq_ignore_ascii_case(&user.email));
    if taken {
        return Err(DomainError::EmailAlreadyExists(user.email.clone()));
    }
    Ok(())
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        ensure_email_free(&users, user)?;
        users.insert(user.id, user.clone());
        info!("User stored in memory: {}", user.id);
        Ok(user.clone())
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(DomainError::UserNotFound(user.id));
        }
        ensure_email_free(&users, user)?;
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.users
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(DomainError::UserNotFound(*id))
    }
}
