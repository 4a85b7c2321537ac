use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        contact::ContactDetails,
        errors::ValidationError,
        user::{Login, PasswordHash, Person, User},
    },
};

pub struct RegisterUserCommand {
    pub login: String,
    pub password: String,
    pub first_name: String,
    pub surname: String,
    pub mail: String,
    pub phone: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let login = Login::new(command.login)?;
        let contact_details = ContactDetails::new(&command.mail, &command.phone)?;
        let person = Person::new(command.first_name, command.surname)?;
        if command.password.is_empty() {
            return Err(ValidationError::EmptyPassword.into());
        }

        if self.user_repo.exists(&login).await? {
            tracing::info!(login = %login, "registration for an existing login");
            return Err(ApplicationError::conflict("user already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let user = User::new(login, password_hash, person, contact_details)?;
        self.user_repo.insert(&user).await?;
        tracing::info!(user_id = %user.id, "user registered");

        Ok(user.into())
    }
}
