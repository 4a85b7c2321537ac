// src/main.rs
use anyhow::{Context, Result};
use board_backend::application::{
    ports::{
        security::{PasswordHasher, SessionCodec},
        time::Clock,
    },
    services::ApplicationServices,
};
use board_backend::config::{AppConfig, StorageBackend};
use board_backend::domain::{advert::AdvertRepository, user::UserRepository};
use board_backend::infrastructure::{
    database,
    repositories::{
        InMemoryAdvertRepository, InMemoryUserRepository, PostgresAdvertRepository,
        PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, session::SignedSessionCodec},
    time::SystemClock,
};
use board_backend::presentation::http::{
    routes::build_router,
    state::{HttpState, SessionCookie},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let (user_repo, advert_repo) = build_repositories(&config).await?;

    let password_hasher: Arc<dyn PasswordHasher> =
        Arc::new(Argon2PasswordHasher::new(config.hashing()));
    let session = config.session();
    let session_ttl =
        chrono::Duration::from_std(session.ttl).context("session ttl out of range")?;
    let session_codec: Arc<dyn SessionCodec> =
        Arc::new(SignedSessionCodec::new(&session.secret, session_ttl)?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        advert_repo,
        password_hasher,
        session_codec,
        clock,
    ));

    let state = HttpState {
        services,
        session_cookie: SessionCookie {
            name: session.cookie_name.clone(),
            secure: session.secure,
            ttl: session.ttl,
        },
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_repositories(
    config: &AppConfig,
) -> Result<(Arc<dyn UserRepository>, Arc<dyn AdvertRepository>)> {
    match config.storage_backend() {
        StorageBackend::Postgres => {
            let pool = database::init_pool(config.database_url()).await?;
            database::run_migrations(&pool).await?;

            let timeout = config.statement_timeout();
            let users: Arc<dyn UserRepository> =
                Arc::new(PostgresUserRepository::new(pool.clone(), timeout));
            let adverts: Arc<dyn AdvertRepository> =
                Arc::new(PostgresAdvertRepository::new(pool, timeout));
            Ok((users, adverts))
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on shutdown");
            let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
            let adverts: Arc<dyn AdvertRepository> =
                Arc::new(InMemoryAdvertRepository::new(Arc::clone(&users)));
            Ok((users, adverts))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
