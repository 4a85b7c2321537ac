use std::sync::Arc;

use crate::{
    application::{
        dto::SessionSubject,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        advert::AdvertRepository,
        user::{Login, User, UserRepository},
    },
};

pub struct AdvertCommandService {
    pub(super) advert_repo: Arc<dyn AdvertRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AdvertCommandService {
    pub fn new(
        advert_repo: Arc<dyn AdvertRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            advert_repo,
            user_repo,
            clock,
        }
    }

    /// Resolve the signed-in user. A session outliving its user is forbidden.
    pub(super) async fn resolve_actor(&self, actor: &SessionSubject) -> ApplicationResult<User> {
        let login = Login::new(actor.login.as_str())
            .map_err(|_| ApplicationError::forbidden("user does not exist anymore"))?;
        self.user_repo
            .find_by_login(&login)
            .await?
            .ok_or_else(|| {
                tracing::info!(login = %login, "session for a removed user");
                ApplicationError::forbidden("user does not exist anymore")
            })
    }
}
