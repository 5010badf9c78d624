mod model;
mod server;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config, error::AppError, realtime::ConnectionRegistry, startup, state::AppState,
    util::session_token::SessionTokenService,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let producer = startup::setup_producer(&config, http_client.clone())?;
    let avatar_storage = startup::setup_avatar_storage(&config, http_client)?;
    let public_url = server::util::url::parse_base_url("PUBLIC_URL", &config.public_url)?;
    let session_tokens = SessionTokenService::new(
        config.session_token_secret.as_bytes(),
        config.session_token_ttl_seconds,
    );

    let state = AppState::new(
        db,
        session_tokens,
        ConnectionRegistry::new(),
        producer,
        avatar_storage,
        public_url,
    );

    let app = startup::build_app(state, &config);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
