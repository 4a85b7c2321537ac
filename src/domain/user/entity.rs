// src/domain/user/entity.rs
use crate::domain::contact::ContactDetails;
use crate::domain::errors::{DomainResult, ValidationError};
use crate::domain::user::value_objects::{Login, PasswordHash, Person, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub login: Login,
    pub password_hash: PasswordHash,
    pub person: Person,
    pub contact_details: ContactDetails,
}

impl User {
    /// Register a new user under a freshly generated id.
    pub fn new(
        login: Login,
        password_hash: PasswordHash,
        person: Person,
        contact_details: ContactDetails,
    ) -> DomainResult<Self> {
        if contact_details.is_empty() {
            return Err(ValidationError::MissingContactData.into());
        }

        Ok(Self {
            id: UserId::generate(),
            login,
            password_hash,
            person,
            contact_details,
        })
    }
}
