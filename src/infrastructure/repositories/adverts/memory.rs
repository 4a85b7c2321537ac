// src/infrastructure/repositories/adverts/memory.rs
use super::rows::{self, AdvertDetailRow, AdvertHeaderRow};
use crate::domain::advert::{Advert, AdvertId, AdvertOwner, AdvertRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::translation::LanguageSet;
use crate::domain::user::{UserId, UserRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Tables {
    headers: Vec<AdvertHeaderRow>,
    details: Vec<AdvertDetailRow>,
}

impl Tables {
    fn live_header(&self, id: AdvertId) -> Option<&AdvertHeaderRow> {
        self.headers
            .iter()
            .find(|header| header.id == id.as_uuid() && header.destroyed_at.is_none())
    }

    fn details_of(&self, advert_id: uuid::Uuid) -> Vec<AdvertDetailRow> {
        self.details
            .iter()
            .filter(|detail| detail.advert_id == advert_id)
            .cloned()
            .collect()
    }
}

/// Advert store keeping the header/detail split in process memory. Both
/// tables sit behind one lock so readers never see a partial advert.
pub struct InMemoryAdvertRepository {
    tables: Mutex<Tables>,
    users: Arc<dyn UserRepository>,
}

impl InMemoryAdvertRepository {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            users,
        }
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| DomainError::Persistence("advert store lock poisoned".into()))
    }
}

#[async_trait]
impl AdvertRepository for InMemoryAdvertRepository {
    async fn add(&self, advert: &Advert) -> DomainResult<()> {
        if self.users.find_by_id(advert.owner_id()).await?.is_none() {
            return Err(DomainError::NotFound("advert owner not found".into()));
        }

        let header = AdvertHeaderRow::try_from(advert)?;
        let details = rows::detail_rows(advert);

        let mut tables = self.lock()?;
        if tables.headers.iter().any(|existing| existing.id == header.id) {
            return Err(DomainError::Conflict("advert already exists".into()));
        }
        tables.headers.push(header);
        tables.details.extend(details);
        Ok(())
    }

    async fn get(&self, id: AdvertId) -> DomainResult<Advert> {
        let (header, details) = {
            let tables = self.lock()?;
            let header = tables
                .live_header(id)
                .cloned()
                .ok_or_else(|| DomainError::NotFound("advert not found".into()))?;
            let details = tables.details_of(header.id);
            (header, details)
        };

        let owner = self
            .users
            .find_by_id(UserId::from(header.user_id))
            .await?
            .ok_or_else(|| DomainError::NotFound("advert not found".into()))?;

        rows::assemble(header, AdvertOwner::Full(Box::new(owner)), details)
    }

    async fn list(
        &self,
        languages: &LanguageSet,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Advert>> {
        let tables = self.lock()?;

        let mut headers: Vec<&AdvertHeaderRow> = tables
            .headers
            .iter()
            .filter(|header| header.destroyed_at.is_none())
            .collect();
        headers.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let mut adverts = Vec::new();
        for header in headers
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
        {
            let owner = AdvertOwner::Stub(UserId::from(header.user_id));
            let advert = rows::assemble(header.clone(), owner, tables.details_of(header.id))?;
            if let Some(advert) = rows::restrict_languages(advert, languages) {
                adverts.push(advert);
            }
        }
        Ok(adverts)
    }

    async fn delete(&self, id: AdvertId, at: DateTime<Utc>) -> DomainResult<()> {
        let mut tables = self.lock()?;
        let header = tables
            .headers
            .iter_mut()
            .find(|header| header.id == id.as_uuid() && header.destroyed_at.is_none())
            .ok_or_else(|| DomainError::NotFound("advert not found".into()))?;
        header.destroyed_at = Some(at);
        Ok(())
    }
}
