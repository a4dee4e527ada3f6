//! CLI subcommands.

pub mod migrate;
pub mod seed;
pub mod stats;

use secrecy::SecretString;
use sqlx::PgPool;

use agriq_web::db::{self, RepositoryError};

/// Errors surfaced by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Refusing to seed: {0}")]
    AlreadySeeded(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Connect using `AGRIQ_DATABASE_URL`, falling back to `DATABASE_URL`.
async fn connect() -> Result<PgPool, CliError> {
    dotenvy::dotenv().ok();

    let url = std::env::var("AGRIQ_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| CliError::MissingEnvVar("AGRIQ_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    Ok(db::create_pool(&url).await?)
}
