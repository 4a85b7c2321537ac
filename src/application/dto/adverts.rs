use crate::domain::{
    advert::{Advert, AdvertOwner},
    translation::MultilingualText,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

use super::users::ContactDetailsDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdvertOwnerDto {
    pub id: Uuid,
    pub login: String,
    pub first_name: String,
    pub surname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdvertDto {
    pub id: Uuid,
    #[schema(value_type = BTreeMap<String, String>)]
    pub title: MultilingualText,
    #[schema(value_type = BTreeMap<String, String>)]
    pub description: MultilingualText,
    #[serde(rename = "type")]
    pub advert_type: String,
    pub views: u32,
    pub contact_details: ContactDetailsDto,
    pub owner_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<AdvertOwnerDto>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destroyed_at: Option<DateTime<Utc>>,
}

impl From<Advert> for AdvertDto {
    fn from(advert: Advert) -> Self {
        let owner_id = advert.owner_id().into();
        let owner = match advert.owner {
            AdvertOwner::Full(user) => Some(AdvertOwnerDto {
                id: user.id.into(),
                login: user.login.into(),
                first_name: user.person.first_name,
                surname: user.person.surname,
            }),
            AdvertOwner::Stub(_) => None,
        };

        Self {
            id: advert.id.into(),
            title: advert.details.title,
            description: advert.details.description,
            advert_type: advert.details.advert_type.as_str().to_owned(),
            views: advert.details.views,
            contact_details: advert.details.contact_details.into(),
            owner_id,
            owner,
            created_at: advert.created_at,
            updated_at: advert.updated_at,
            destroyed_at: advert.destroyed_at,
        }
    }
}
