mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_users(&db).await?;

    let tokens = startup::build_token_service(&config);
    let http_client = startup::setup_reqwest_client()?;
    let ollama = startup::setup_ollama_client(&config, http_client);
    let cors = startup::build_cors(&config)?;

    let app = server::router::router()
        .with_state(AppState::new(db, tokens, ollama))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
