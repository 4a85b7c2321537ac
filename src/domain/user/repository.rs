use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::User,
    value_objects::{Login, UserId},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: &User) -> DomainResult<()>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_login(&self, login: &Login) -> DomainResult<Option<User>>;

    async fn exists(&self, login: &Login) -> DomainResult<bool>;
}
