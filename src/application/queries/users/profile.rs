use super::UserQueryService;
use crate::{
    application::{
        dto::{SessionSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Login,
};

impl UserQueryService {
    pub async fn get_profile(&self, actor: &SessionSubject) -> ApplicationResult<UserDto> {
        let login = Login::new(actor.login.as_str())
            .map_err(|_| ApplicationError::forbidden("user does not exist anymore"))?;
        let user = self
            .user_repo
            .find_by_login(&login)
            .await?
            .ok_or_else(|| ApplicationError::forbidden("user does not exist anymore"))?;
        Ok(user.into())
    }
}
