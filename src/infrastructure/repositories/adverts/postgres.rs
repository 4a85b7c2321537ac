// src/infrastructure/repositories/adverts/postgres.rs
use super::rows::{self, AdvertDetailRow, AdvertHeaderRow};
use crate::domain::advert::{Advert, AdvertId, AdvertOwner, AdvertRepository};
use crate::domain::contact::ContactDetails;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::translation::LanguageSet;
use crate::domain::user::{Login, PasswordHash, Person, User, UserId};
use crate::infrastructure::repositories::error::{map_sqlx, with_deadline};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;
use std::time::Duration;
use uuid::Uuid;

const HEADER_COLUMNS: &str =
    "a.id, a.user_id, a.type, a.views, a.contact_details, a.created_at, a.updated_at, a.destroyed_at";

#[derive(Clone)]
pub struct PostgresAdvertRepository {
    pool: PgPool,
    statement_timeout: Duration,
}

impl PostgresAdvertRepository {
    pub fn new(pool: PgPool, statement_timeout: Duration) -> Self {
        Self {
            pool,
            statement_timeout,
        }
    }

    async fn insert_advert(&self, advert: &Advert) -> DomainResult<()> {
        let header = AdvertHeaderRow::try_from(advert)?;
        let details = rows::detail_rows(advert);

        // dropping the transaction on any error rolls it back
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query(
            "INSERT INTO adverts (id, user_id, type, views, contact_details, created_at, updated_at, destroyed_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(header.id)
        .bind(header.user_id)
        .bind(&header.advert_type)
        .bind(header.views)
        .bind(&header.contact_details)
        .bind(header.created_at)
        .bind(header.updated_at)
        .bind(header.destroyed_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if !details.is_empty() {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO adverts_details (id, advert_id, language, title, description) ",
            );
            builder.push_values(&details, |mut row, detail| {
                row.push_bind(detail.id)
                    .push_bind(detail.advert_id)
                    .push_bind(&detail.language)
                    .push_bind(&detail.title)
                    .push_bind(&detail.description);
            });
            builder
                .build()
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)
    }

    async fn load_advert(&self, id: AdvertId) -> DomainResult<Advert> {
        let row = sqlx::query_as::<_, AdvertWithOwnerRow>(&format!(
            "SELECT {HEADER_COLUMNS},
                    u.login AS owner_login, u.password AS owner_password,
                    u.name AS owner_name, u.surname AS owner_surname,
                    u.mail AS owner_mail, u.phone_number AS owner_phone_number
             FROM adverts a
             JOIN users u ON u.id = a.user_id
             WHERE a.id = $1 AND a.destroyed_at IS NULL"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("advert not found".into()))?;

        let details = self.load_details(&[row.header.id]).await?;
        let owner = AdvertOwner::Full(Box::new(row.owner()?));
        rows::assemble(row.header, owner, details)
    }

    async fn load_page(
        &self,
        languages: &LanguageSet,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Advert>> {
        let headers = sqlx::query_as::<_, AdvertHeaderRow>(&format!(
            "SELECT {HEADER_COLUMNS}
             FROM adverts a
             WHERE a.destroyed_at IS NULL
             ORDER BY a.created_at DESC, a.id DESC
             LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if headers.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = headers.iter().map(|header| header.id).collect();
        let mut grouped: HashMap<Uuid, Vec<AdvertDetailRow>> = HashMap::new();
        for detail in self.load_details(&ids).await? {
            grouped.entry(detail.advert_id).or_default().push(detail);
        }

        let mut adverts = Vec::with_capacity(headers.len());
        for header in headers {
            let details = grouped.remove(&header.id).unwrap_or_default();
            let owner = AdvertOwner::Stub(UserId::from(header.user_id));
            let advert = rows::assemble(header, owner, details)?;
            if let Some(advert) = rows::restrict_languages(advert, languages) {
                adverts.push(advert);
            }
        }
        Ok(adverts)
    }

    async fn load_details(&self, advert_ids: &[Uuid]) -> DomainResult<Vec<AdvertDetailRow>> {
        sqlx::query_as::<_, AdvertDetailRow>(
            "SELECT id, advert_id, language, title, description
             FROM adverts_details
             WHERE advert_id = ANY($1)",
        )
        .bind(advert_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn mark_destroyed(&self, id: AdvertId, at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE adverts SET destroyed_at = $2 WHERE id = $1 AND destroyed_at IS NULL",
        )
        .bind(id.as_uuid())
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("advert not found".into()));
        }
        Ok(())
    }
}

#[derive(Debug, FromRow)]
struct AdvertWithOwnerRow {
    #[sqlx(flatten)]
    header: AdvertHeaderRow,
    owner_login: String,
    owner_password: String,
    owner_name: String,
    owner_surname: String,
    owner_mail: Option<String>,
    owner_phone_number: Option<String>,
}

impl AdvertWithOwnerRow {
    fn owner(&self) -> DomainResult<User> {
        Ok(User {
            id: UserId::from(self.header.user_id),
            login: Login::new(self.owner_login.as_str())?,
            password_hash: PasswordHash::new(self.owner_password.as_str())?,
            person: Person {
                first_name: self.owner_name.clone(),
                surname: self.owner_surname.clone(),
            },
            contact_details: ContactDetails::from_stored(
                self.owner_mail.clone(),
                self.owner_phone_number.clone(),
            ),
        })
    }
}

#[async_trait]
impl AdvertRepository for PostgresAdvertRepository {
    async fn add(&self, advert: &Advert) -> DomainResult<()> {
        with_deadline(self.statement_timeout, "add advert", self.insert_advert(advert)).await
    }

    async fn get(&self, id: AdvertId) -> DomainResult<Advert> {
        with_deadline(self.statement_timeout, "get advert", self.load_advert(id)).await
    }

    async fn list(
        &self,
        languages: &LanguageSet,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Advert>> {
        with_deadline(
            self.statement_timeout,
            "list adverts",
            self.load_page(languages, limit, offset),
        )
        .await
    }

    async fn delete(&self, id: AdvertId, at: DateTime<Utc>) -> DomainResult<()> {
        with_deadline(
            self.statement_timeout,
            "delete advert",
            self.mark_destroyed(id, at),
        )
        .await
    }
}
