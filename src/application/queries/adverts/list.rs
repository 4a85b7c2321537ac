use super::AdvertQueryService;
use crate::{
    application::{dto::AdvertDto, error::ApplicationResult},
    domain::translation::LanguageSet,
};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

pub struct ListAdvertsQuery {
    pub languages: LanguageSet,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl AdvertQueryService {
    /// The result may be shorter than the limit even when more adverts exist.
    pub async fn list_adverts(&self, query: ListAdvertsQuery) -> ApplicationResult<Vec<AdvertDto>> {
        let limit = normalize_limit(query.limit);
        let offset = query.offset.unwrap_or(0);

        let adverts = self
            .advert_repo
            .list(&query.languages, limit, offset)
            .await?;

        Ok(adverts.into_iter().map(Into::into).collect())
    }
}

fn normalize_limit(limit: Option<u32>) -> u32 {
    match limit {
        None | Some(0) => DEFAULT_LIMIT,
        Some(value) => value.min(MAX_LIMIT),
    }
}
