//! Mapping between the advert aggregate and its two-relation storage shape:
//! one header row per advert, one detail row per translated language.

use crate::domain::advert::{Advert, AdvertDetails, AdvertId, AdvertOwner, AdvertType};
use crate::domain::contact::ContactDetails;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::translation::{LanguageSet, MultilingualText};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, types::Json};
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub(crate) struct AdvertHeaderRow {
    pub id: Uuid,
    pub user_id: Uuid,
    #[sqlx(rename = "type")]
    pub advert_type: String,
    pub views: i32,
    pub contact_details: Json<ContactDetails>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub destroyed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct AdvertDetailRow {
    pub id: Uuid,
    pub advert_id: Uuid,
    pub language: String,
    pub title: String,
    pub description: String,
}

impl TryFrom<&Advert> for AdvertHeaderRow {
    type Error = DomainError;

    fn try_from(advert: &Advert) -> Result<Self, Self::Error> {
        let views = i32::try_from(advert.details.views)
            .map_err(|_| DomainError::Validation("views out of range".into()))?;

        Ok(Self {
            id: advert.id.into(),
            user_id: advert.owner_id().into(),
            advert_type: advert.details.advert_type.as_str().to_owned(),
            views,
            contact_details: Json(advert.details.contact_details.clone()),
            created_at: advert.created_at,
            updated_at: advert.updated_at,
            destroyed_at: advert.destroyed_at,
        })
    }
}

/// One row per supported language present in both title and description.
pub(crate) fn detail_rows(advert: &Advert) -> Vec<AdvertDetailRow> {
    let title = &advert.details.title;
    let description = &advert.details.description;

    title
        .shared_languages(description)
        .filter(|language| language.is_supported())
        .filter_map(|language| {
            Some(AdvertDetailRow {
                id: Uuid::new_v4(),
                advert_id: advert.id.into(),
                language: language.as_str().to_owned(),
                title: title.get(language.as_str())?.to_owned(),
                description: description.get(language.as_str())?.to_owned(),
            })
        })
        .collect()
}

/// Rebuild an advert from its header and detail rows. Unsupported
/// languages found in storage are dropped.
pub(crate) fn assemble(
    header: AdvertHeaderRow,
    owner: AdvertOwner,
    details: impl IntoIterator<Item = AdvertDetailRow>,
) -> DomainResult<Advert> {
    let mut title = MultilingualText::new();
    let mut description = MultilingualText::new();
    for row in details {
        title.insert(row.language.clone(), row.title);
        description.insert(row.language, row.description);
    }
    title.retain_supported();
    description.retain_supported();

    let advert_type: AdvertType = header.advert_type.parse()?;
    let views = u32::try_from(header.views)
        .map_err(|_| DomainError::Persistence(format!("negative views on advert {}", header.id)))?;

    Ok(Advert {
        id: AdvertId::from(header.id),
        owner,
        details: AdvertDetails {
            title,
            description,
            advert_type,
            views,
            contact_details: header.contact_details.0,
        },
        created_at: header.created_at,
        updated_at: header.updated_at,
        destroyed_at: header.destroyed_at,
    })
}

/// Narrow an advert to `languages`. An empty set keeps everything. `None`
/// when nothing useful is left to show.
pub(crate) fn restrict_languages(mut advert: Advert, languages: &LanguageSet) -> Option<Advert> {
    if !languages.is_empty() {
        advert.details.title = advert.details.title.restricted_to(languages);
        advert.details.description = advert.details.description.restricted_to(languages);
    }

    if advert.details.title.is_empty() || advert.details.description.is_empty() {
        return None;
    }
    Some(advert)
}
