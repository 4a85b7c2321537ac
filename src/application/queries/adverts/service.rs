use std::sync::Arc;

use crate::domain::advert::AdvertRepository;

pub struct AdvertQueryService {
    pub(super) advert_repo: Arc<dyn AdvertRepository>,
}

impl AdvertQueryService {
    pub fn new(advert_repo: Arc<dyn AdvertRepository>) -> Self {
        Self { advert_repo }
    }
}
