// src/infrastructure/repositories/users/postgres.rs
use super::super::error::{map_sqlx, with_deadline};
use crate::domain::contact::ContactDetails;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Login, PasswordHash, Person, User, UserId, UserRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::time::Duration;
use uuid::Uuid;

const USER_COLUMNS: &str = "id, login, password, name, surname, mail, phone_number";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
    statement_timeout: Duration,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool, statement_timeout: Duration) -> Self {
        Self {
            pool,
            statement_timeout,
        }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    login: String,
    password: String,
    name: String,
    surname: String,
    mail: Option<String>,
    phone_number: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::from(row.id),
            login: Login::new(row.login)?,
            password_hash: PasswordHash::new(row.password)?,
            person: Person {
                first_name: row.name,
                surname: row.surname,
            },
            contact_details: ContactDetails::from_stored(row.mail, row.phone_number),
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: &User) -> DomainResult<()> {
        let query = sqlx::query(
            "INSERT INTO users (id, login, password, name, surname, mail, phone_number)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(user.id.as_uuid())
        .bind(user.login.as_str())
        .bind(user.password_hash.as_str())
        .bind(&user.person.first_name)
        .bind(&user.person.surname)
        .bind(user.contact_details.mail.as_deref())
        .bind(user.contact_details.phone_number.as_deref())
        .execute(&self.pool);

        with_deadline(self.statement_timeout, "insert user", async {
            query.await.map(|_| ()).map_err(map_sqlx)
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        with_deadline(
            self.statement_timeout,
            "find user by id",
            async {
                sqlx::query_as::<_, UserRow>(&format!(
                    "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
                ))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?
                .map(User::try_from)
                .transpose()
            },
        )
        .await
    }

    async fn find_by_login(&self, login: &Login) -> DomainResult<Option<User>> {
        with_deadline(
            self.statement_timeout,
            "find user by login",
            async {
                sqlx::query_as::<_, UserRow>(&format!(
                    "SELECT {USER_COLUMNS} FROM users WHERE login = $1"
                ))
                .bind(login.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?
                .map(User::try_from)
                .transpose()
            },
        )
        .await
    }

    async fn exists(&self, login: &Login) -> DomainResult<bool> {
        let query = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE login = $1)",
        )
        .bind(login.as_str())
        .fetch_one(&self.pool);

        with_deadline(self.statement_timeout, "check user exists", async {
            query.await.map_err(map_sqlx)
        })
        .await
    }
}
