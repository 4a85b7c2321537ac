use super::AdvertQueryService;
use crate::{
    application::{dto::AdvertDto, error::ApplicationResult},
    domain::advert::AdvertId,
};
use uuid::Uuid;

pub struct GetAdvertQuery {
    pub id: Uuid,
}

impl AdvertQueryService {
    pub async fn get_advert(&self, query: GetAdvertQuery) -> ApplicationResult<AdvertDto> {
        let advert = self.advert_repo.get(AdvertId::from(query.id)).await?;
        Ok(advert.into())
    }
}
