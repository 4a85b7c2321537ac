use crate::domain::{contact::ContactDetails, user::User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactDetailsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<ContactDetails> for ContactDetailsDto {
    fn from(value: ContactDetails) -> Self {
        Self {
            mail: value.mail,
            phone: value.phone_number,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub login: String,
    pub first_name: String,
    pub surname: String,
    pub contact_details: ContactDetailsDto,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            login: user.login.into(),
            first_name: user.person.first_name,
            surname: user.person.surname,
            contact_details: user.contact_details.into(),
        }
    }
}
