// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{adverts::AdvertCommandService, users::UserCommandService},
        dto::SessionSubject,
        error::ApplicationError,
        ports::{
            security::{PasswordHasher, SessionCodec},
            time::Clock,
        },
        queries::{adverts::AdvertQueryService, users::UserQueryService},
    },
    domain::{advert::AdvertRepository, user::UserRepository},
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub advert_commands: Arc<AdvertCommandService>,
    pub advert_queries: Arc<AdvertQueryService>,
    session_codec: Arc<dyn SessionCodec>,
    clock: Arc<dyn Clock>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        advert_repo: Arc<dyn AdvertRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_codec: Arc<dyn SessionCodec>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&session_codec),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        let advert_commands = Arc::new(AdvertCommandService::new(
            Arc::clone(&advert_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));
        let advert_queries = Arc::new(AdvertQueryService::new(Arc::clone(&advert_repo)));

        Self {
            user_commands,
            user_queries,
            advert_commands,
            advert_queries,
            session_codec,
            clock,
        }
    }

    /// Verify a raw session cookie value against the current time.
    pub fn authenticate_session(&self, value: &str) -> ApplicationResult<SessionSubject> {
        self.session_codec
            .decode(value, self.clock.now())
            .map_err(|err| {
                tracing::debug!(error = %err, "rejected session cookie");
                ApplicationError::unauthorized("not authorized")
            })
    }
}
