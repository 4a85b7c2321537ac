// tests/application_services_unit.rs
use std::sync::Arc;

use async_trait::async_trait;
use board_backend::application::commands::adverts::{
    ContactInput, CreateAdvertCommand, DeleteAdvertCommand,
};
use board_backend::application::commands::users::{LoginUserCommand, RegisterUserCommand};
use board_backend::application::dto::SessionSubject;
use board_backend::application::error::ApplicationError;
use board_backend::application::queries::adverts::ListAdvertsQuery;
use board_backend::application::services::ApplicationServices;
use board_backend::domain::errors::{DomainError, DomainResult};
use board_backend::domain::translation::{LanguageSet, LanguageTag, MultilingualText};
use board_backend::domain::user::{Login, User, UserId, UserRepository};
use board_backend::infrastructure::repositories::{InMemoryAdvertRepository, InMemoryUserRepository};
use board_backend::infrastructure::security::{
    password::Argon2PasswordHasher, session::SignedSessionCodec,
};
use chrono::Duration;

mod support;

use support::{SteppingClock, TEST_SECRET, cheap_hashing, fixed_now};

/// User store that has forgotten everyone.
struct EmptyUserRepo;

#[async_trait]
impl UserRepository for EmptyUserRepo {
    async fn insert(&self, _user: &User) -> DomainResult<()> {
        Err(DomainError::Persistence("read only".into()))
    }

    async fn find_by_id(&self, _id: UserId) -> DomainResult<Option<User>> {
        Ok(None)
    }

    async fn find_by_login(&self, _login: &Login) -> DomainResult<Option<User>> {
        Ok(None)
    }

    async fn exists(&self, _login: &Login) -> DomainResult<bool> {
        Ok(false)
    }
}

fn services_with(user_repo: Arc<dyn UserRepository>) -> ApplicationServices {
    let advert_repo = Arc::new(InMemoryAdvertRepository::new(Arc::clone(&user_repo)));
    ApplicationServices::new(
        user_repo,
        advert_repo,
        Arc::new(Argon2PasswordHasher::new(cheap_hashing())),
        Arc::new(SignedSessionCodec::new(TEST_SECRET, Duration::hours(1)).unwrap()),
        Arc::new(SteppingClock::default()),
    )
}

fn services() -> ApplicationServices {
    services_with(Arc::new(InMemoryUserRepository::new()))
}

fn register(login: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        login: login.into(),
        password: "secret".into(),
        first_name: "Adam".into(),
        surname: "Nowak".into(),
        mail: format!("{login}@example.com"),
        phone: String::new(),
    }
}

fn subject(login: &str) -> SessionSubject {
    SessionSubject {
        login: login.into(),
        expires_at: fixed_now() + Duration::hours(1),
    }
}

fn create(title: &[(&str, &str)]) -> CreateAdvertCommand {
    CreateAdvertCommand {
        title: title.iter().copied().map(|(l, t)| (LanguageTag::from(l), t.to_owned())).collect(),
        description: MultilingualText::from([("en", "desc"), ("pl", "opis")]),
        advert_type: "job".into(),
        contact: ContactInput::default(),
    }
}

#[tokio::test]
async fn registered_user_can_sign_in_and_session_authenticates() {
    let services = services();
    let user = services.user_commands.register(register("adam")).await.unwrap();
    assert_eq!(user.login, "adam");

    let result = services
        .user_commands
        .login(LoginUserCommand {
            login: "adam".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert_eq!(result.user.id, user.id);

    let session = services.authenticate_session(&result.session.value).unwrap();
    assert_eq!(session.login, "adam");
    assert!(matches!(
        services.authenticate_session("garbage"),
        Err(ApplicationError::Unauthorized(_))
    ));
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let services = services();
    services.user_commands.register(register("adam")).await.unwrap();

    let err = services
        .user_commands
        .register(register("adam"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn adverts_are_created_listed_and_deleted() {
    let services = services();
    services.user_commands.register(register("adam")).await.unwrap();
    let actor = subject("adam");

    let advert = services
        .advert_commands
        .create_advert(&actor, create(&[("en", "Waiter"), ("pl", "Kelner")]))
        .await
        .unwrap();
    assert_eq!(advert.advert_type, "job");
    assert_eq!(advert.contact_details.mail.as_deref(), Some("adam@example.com"));

    let listed = services
        .advert_queries
        .list_adverts(ListAdvertsQuery {
            languages: LanguageSet::new(),
            limit: None,
            offset: None,
        })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].owner.is_none());

    services
        .advert_commands
        .delete_advert(&actor, DeleteAdvertCommand { id: advert.id })
        .await
        .unwrap();
}

#[tokio::test]
async fn strangers_cannot_delete() {
    let services = services();
    services.user_commands.register(register("adam")).await.unwrap();
    services.user_commands.register(register("ewa")).await.unwrap();

    let advert = services
        .advert_commands
        .create_advert(&subject("adam"), create(&[("en", "Waiter")]))
        .await
        .unwrap();

    let err = services
        .advert_commands
        .delete_advert(&subject("ewa"), DeleteAdvertCommand { id: advert.id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn session_of_vanished_user_is_forbidden() {
    let services = services_with(Arc::new(EmptyUserRepo));

    let err = services
        .advert_commands
        .create_advert(&subject("ghost"), create(&[("en", "Waiter")]))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let err = services
        .user_queries
        .get_profile(&subject("ghost"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}
