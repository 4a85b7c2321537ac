// src/domain/advert/entity.rs
use crate::domain::advert::value_objects::{AdvertId, AdvertType};
use crate::domain::contact::ContactDetails;
use crate::domain::errors::{DomainResult, ValidationError};
use crate::domain::translation::MultilingualText;
use crate::domain::user::{User, UserId};
use chrono::{DateTime, Utc};

/// The user an advert belongs to. List reads only carry the owner id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvertOwner {
    Full(Box<User>),
    Stub(UserId),
}

impl AdvertOwner {
    pub fn id(&self) -> UserId {
        match self {
            Self::Full(user) => user.id,
            Self::Stub(id) => *id,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Full(user) => Some(user),
            Self::Stub(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertDetails {
    pub title: MultilingualText,
    pub description: MultilingualText,
    pub advert_type: AdvertType,
    pub views: u32,
    pub contact_details: ContactDetails,
}

#[derive(Debug, Clone)]
pub enum AdvertOption {
    WithContactDetails(ContactDetails),
}

impl AdvertOption {
    fn apply(self, details: &mut AdvertDetails) -> DomainResult<()> {
        match self {
            Self::WithContactDetails(contact_details) => {
                if contact_details.is_empty() {
                    return Err(ValidationError::ContactEmpty.into());
                }
                details.contact_details = contact_details;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advert {
    pub id: AdvertId,
    pub owner: AdvertOwner,
    pub details: AdvertDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub destroyed_at: Option<DateTime<Utc>>,
}

impl Advert {
    /// Build a fresh advert owned by `user`.
    ///
    /// Emptiness of title and description is judged on the raw input, the
    /// shared-language check on the supported subset. The returned advert
    /// always has overlapping texts and non-empty contact details.
    pub fn new(
        user: Option<&User>,
        title: MultilingualText,
        description: MultilingualText,
        advert_type: AdvertType,
        created_at: DateTime<Utc>,
        options: impl IntoIterator<Item = AdvertOption>,
    ) -> DomainResult<Self> {
        let user = user.ok_or(ValidationError::NoUserProvided)?;
        let id = AdvertId::generate();

        let mut details = AdvertDetails {
            title: MultilingualText::new(),
            description: MultilingualText::new(),
            advert_type,
            views: 0,
            contact_details: ContactDetails::default(),
        };
        for option in options {
            option.apply(&mut details)?;
        }

        if title.is_empty() || description.is_empty() {
            return Err(ValidationError::MissingBasicInfo.into());
        }

        let title = title.supported();
        let description = description.supported();
        if title.shared_languages(&description).next().is_none() {
            return Err(ValidationError::InvalidLanguages.into());
        }
        details.title = title;
        details.description = description;

        if details.contact_details.is_empty() {
            details.contact_details = user.contact_details.clone();
        }

        Ok(Self {
            id,
            owner: AdvertOwner::Full(Box::new(user.clone())),
            details,
            created_at,
            updated_at: None,
            destroyed_at: None,
        })
    }

    pub fn owner_id(&self) -> UserId {
        self.owner.id()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed_at.is_some()
    }

    pub fn destroy(&mut self, now: DateTime<Utc>) {
        self.destroyed_at = Some(now);
    }
}
