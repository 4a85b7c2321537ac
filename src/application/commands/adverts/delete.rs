use super::AdvertCommandService;
use crate::{
    application::{
        dto::SessionSubject,
        error::{ApplicationError, ApplicationResult},
    },
    domain::advert::AdvertId,
};
use uuid::Uuid;

pub struct DeleteAdvertCommand {
    pub id: Uuid,
}

impl AdvertCommandService {
    pub async fn delete_advert(
        &self,
        actor: &SessionSubject,
        command: DeleteAdvertCommand,
    ) -> ApplicationResult<()> {
        let user = self.resolve_actor(actor).await?;
        let id = AdvertId::from(command.id);
        let advert = self.advert_repo.get(id).await?;

        if advert.owner_id() != user.id {
            return Err(ApplicationError::forbidden(
                "only the owner can delete an advert",
            ));
        }

        self.advert_repo.delete(id, self.clock.now()).await?;
        tracing::info!(advert_id = %id, "advert destroyed");
        Ok(())
    }
}
