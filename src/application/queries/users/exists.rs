use super::UserQueryService;
use crate::{application::error::ApplicationResult, domain::user::Login};

impl UserQueryService {
    pub async fn user_exists(&self, login: &str) -> ApplicationResult<bool> {
        let Ok(login) = Login::new(login) else {
            return Ok(false);
        };
        Ok(self.user_repo.exists(&login).await?)
    }
}
