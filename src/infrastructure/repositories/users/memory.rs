use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Login, User, UserId, UserRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, HashMap<UserId, User>>> {
        self.users
            .lock()
            .map_err(|_| DomainError::Persistence("user store lock poisoned".into()))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> DomainResult<()> {
        let mut users = self.lock()?;
        if users.values().any(|existing| existing.login == user.login) {
            return Err(DomainError::Conflict("user already exists".into()));
        }
        if users.contains_key(&user.id) {
            return Err(DomainError::Conflict("user id already taken".into()));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.lock()?.get(&id).cloned())
    }

    async fn find_by_login(&self, login: &Login) -> DomainResult<Option<User>> {
        Ok(self
            .lock()?
            .values()
            .find(|user| &user.login == login)
            .cloned())
    }

    async fn exists(&self, login: &Login) -> DomainResult<bool> {
        Ok(self.lock()?.values().any(|user| &user.login == login))
    }
}
