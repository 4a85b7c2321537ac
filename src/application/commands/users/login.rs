use super::UserCommandService;
use crate::{
    application::{
        dto::{IssuedSession, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Login, User},
};

pub struct LoginUserCommand {
    pub login: String,
    pub password: String,
}

pub struct LoginResult {
    pub session: IssuedSession,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let user = self
            .find_and_authenticate_user(&command.login, &command.password)
            .await?;

        let session = self
            .session_codec
            .issue(user.login.as_str(), self.clock.now())?;

        Ok(LoginResult {
            session,
            user: user.into(),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        login: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        let login =
            Login::new(login).map_err(|_| ApplicationError::validation("user does not exist"))?;

        let user = self
            .user_repo
            .find_by_login(&login)
            .await?
            .ok_or_else(|| {
                tracing::info!(login = %login, "login attempt for unknown user");
                ApplicationError::validation("user does not exist")
            })?;

        let valid = self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;
        if !valid {
            tracing::info!(login = %login, "wrong credentials");
            return Err(ApplicationError::forbidden("wrong credentials"));
        }

        Ok(user)
    }
}
