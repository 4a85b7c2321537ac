// tests/support/builders.rs
use board_backend::domain::advert::{Advert, AdvertOption, AdvertType};
use board_backend::domain::contact::ContactDetails;
use board_backend::domain::translation::MultilingualText;
use board_backend::domain::user::{Login, PasswordHash, Person, User};
use chrono::{DateTime, Utc};

use super::mocks::fixed_now;

pub struct UserBuilder {
    login: String,
    first_name: String,
    surname: String,
    mail: String,
    phone: String,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            login: "adam".into(),
            first_name: "Adam".into(),
            surname: "Nowak".into(),
            mail: "adam@example.com".into(),
            phone: String::new(),
        }
    }

    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = login.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn build(self) -> User {
        User::new(
            Login::new(self.login).expect("valid login"),
            PasswordHash::new("$argon2id$stub").expect("valid hash"),
            Person::new(self.first_name, self.surname).expect("valid person"),
            ContactDetails::new(&self.mail, &self.phone).expect("valid contact"),
        )
        .expect("valid user")
    }
}

pub struct AdvertBuilder {
    title: MultilingualText,
    description: MultilingualText,
    advert_type: AdvertType,
    created_at: DateTime<Utc>,
    contact: Option<ContactDetails>,
}

impl AdvertBuilder {
    pub fn new() -> Self {
        Self {
            title: MultilingualText::from([("en", "Lift to Warsaw"), ("pl", "Podwózka do Warszawy")]),
            description: MultilingualText::from([
                ("en", "Two free seats"),
                ("pl", "Dwa wolne miejsca"),
            ]),
            advert_type: AdvertType::Transport,
            created_at: fixed_now(),
            contact: None,
        }
    }

    pub fn texts(mut self, title: MultilingualText, description: MultilingualText) -> Self {
        self.title = title;
        self.description = description;
        self
    }

    pub fn advert_type(mut self, advert_type: AdvertType) -> Self {
        self.advert_type = advert_type;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn contact(mut self, contact: ContactDetails) -> Self {
        self.contact = Some(contact);
        self
    }

    pub fn build(self, owner: &User) -> Advert {
        let options = self.contact.map(AdvertOption::WithContactDetails);
        Advert::new(
            Some(owner),
            self.title,
            self.description,
            self.advert_type,
            self.created_at,
            options,
        )
        .expect("valid advert")
    }
}

/// Human-readable names for generated ids, owned by the test that uses it.
#[derive(Debug, Default)]
pub struct IdBook {
    labels: std::collections::HashMap<uuid::Uuid, String>,
}

impl IdBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: impl Into<String>, id: impl Into<uuid::Uuid>) {
        self.labels.insert(id.into(), label.into());
    }

    /// Labels for `ids` in order; unknown ids render as their raw value.
    pub fn labels<I>(&self, ids: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: Into<uuid::Uuid>,
    {
        ids.into_iter()
            .map(Into::into)
            .map(|id| self.labels.get(&id).cloned().unwrap_or_else(|| id.to_string()))
            .collect()
    }
}
