use super::AdvertCommandService;
use crate::{
    application::{
        dto::{AdvertDto, SessionSubject},
        error::ApplicationResult,
    },
    domain::{
        advert::{Advert, AdvertOption, AdvertType},
        contact::ContactDetails,
        translation::MultilingualText,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ContactInput {
    pub mail: String,
    pub phone: String,
}

impl ContactInput {
    fn is_blank(&self) -> bool {
        self.mail.is_empty() && self.phone.is_empty()
    }
}

pub struct CreateAdvertCommand {
    pub title: MultilingualText,
    pub description: MultilingualText,
    pub advert_type: String,
    pub contact: ContactInput,
}

impl AdvertCommandService {
    pub async fn create_advert(
        &self,
        actor: &SessionSubject,
        command: CreateAdvertCommand,
    ) -> ApplicationResult<AdvertDto> {
        let user = self.resolve_actor(actor).await?;
        let advert_type: AdvertType = command.advert_type.parse()?;

        // blank contact falls back to the owner's details
        let mut options = Vec::new();
        if !command.contact.is_blank() {
            let contact = ContactDetails::new(&command.contact.mail, &command.contact.phone)?;
            options.push(AdvertOption::WithContactDetails(contact));
        }

        let advert = Advert::new(
            Some(&user),
            command.title,
            command.description,
            advert_type,
            self.clock.now(),
            options,
        )?;
        self.advert_repo.add(&advert).await?;
        tracing::info!(advert_id = %advert.id, owner_id = %user.id, "advert created");

        Ok(advert.into())
    }
}
