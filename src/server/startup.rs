use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::{
        auth::token::TokenService, chatbot::client::OllamaClient, user::UserService,
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the bearer token service from configuration.
///
/// Without a configured secret a random one is generated, which invalidates every token
/// issued before the restart.
pub fn build_token_service(config: &Config) -> TokenService {
    let secret = match &config.jwt_secret {
        Some(secret) => secret.clone(),
        None => {
            tracing::warn!(
                "JWT_SECRET is not set; generated a random signing secret for this run"
            );
            TokenService::random_secret()
        }
    };

    TokenService::new(secret, config.jwt_expiration_seconds)
}

/// Creates the HTTP client used for outbound calls.
///
/// Redirects are disabled so the configured generation endpoint is the only host
/// contacted.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::InternalError)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {e}")))
}

pub fn setup_ollama_client(config: &Config, http: reqwest::Client) -> OllamaClient {
    OllamaClient::new(http, config.ollama_url.clone(), config.ollama_model.clone())
        .with_timeout(config.ollama_timeout)
}

/// Builds the CORS layer.
///
/// Allows any origin unless `CORS_ALLOWED_ORIGIN` names one.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer to wrap the router with
/// - `Err(ConfigError::InvalidEnvVar)` - Configured origin is not a valid header value
pub fn build_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match &config.cors_allowed_origin {
        Some(origin) => {
            let origin =
                HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                    name: "CORS_ALLOWED_ORIGIN".to_string(),
                    reason: e.to_string(),
                })?;
            Ok(cors.allow_origin(origin))
        }
        None => Ok(cors.allow_origin(Any)),
    }
}

/// Seeds the default accounts on an empty database.
pub async fn seed_users(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    if UserService::new(db).seed_default_users().await? {
        tracing::info!("Seeded default users");
    }

    Ok(())
}
