use crate::domain::advert::{entity::Advert, value_objects::AdvertId};
use crate::domain::errors::DomainResult;
use crate::domain::translation::LanguageSet;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage for adverts split into one header and per-language detail rows.
#[async_trait]
pub trait AdvertRepository: Send + Sync {
    /// Store the header and every shared-language detail row atomically.
    async fn add(&self, advert: &Advert) -> DomainResult<()>;

    /// Load one live advert together with its owner.
    async fn get(&self, id: AdvertId) -> DomainResult<Advert>;

    /// One page of live adverts, newest first, restricted to `languages`
    /// unless the set is empty. Adverts left without text in the requested
    /// languages are skipped, so a page may be shorter than `limit`.
    async fn list(
        &self,
        languages: &LanguageSet,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Advert>>;

    /// Mark a live advert as destroyed.
    async fn delete(&self, id: AdvertId, at: DateTime<Utc>) -> DomainResult<()>;
}
