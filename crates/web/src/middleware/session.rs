//! Session middleware configuration.
//!
//! `PostgreSQL`-backed sessions (tower-sessions) stored in `agriq.session`.
//! The session only carries the signed-in user's ID. The cookie holding the
//! session ID is signed with `AGRIQ_SESSION_SECRET`.

use secrecy::ExposeSecret;
use sqlx::PgPool;
use tower_sessions::cookie::{Key, KeyError};
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::AppConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "agriq_session";

/// Session expiry time in seconds (8 hours, one working shift).
const SESSION_EXPIRY_SECONDS: i64 = 8 * 60 * 60;

/// Cookie signing key built from the session secret.
///
/// # Errors
///
/// Returns `KeyError` if the secret is shorter than 64 bytes.
pub fn session_key(config: &AppConfig) -> Result<Key, KeyError> {
    Key::try_from(config.session_secret.expose_secret().as_bytes())
}

/// Create the session layer with `PostgreSQL` store.
///
/// The session table is created by the `agriq` schema migrations.
///
/// # Panics
///
/// Panics if the schema name or table name is invalid, which cannot happen
/// with the constant `agriq` and `session` values, or if the session secret
/// is too short to sign with. `AppConfig::from_env` rejects such secrets.
#[must_use]
pub fn create_session_layer(
    pool: &PgPool,
    config: &AppConfig,
) -> SessionManagerLayer<PostgresStore, SignedCookie> {
    let store = PostgresStore::new(pool.clone())
        .with_schema_name("agriq")
        .expect("valid schema name")
        .with_table_name("session")
        .expect("valid table name");

    let key = session_key(config).expect("session secret is at least 64 bytes");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
        .with_signed(key)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use secrecy::SecretString;

    use super::*;

    fn config_with_secret(secret: &str) -> AppConfig {
        AppConfig {
            database_url: SecretString::from("postgres://localhost/agriq"),
            host: std::net::IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            session_secret: SecretString::from(secret),
            static_dir: PathBuf::from("static"),
            log_json: false,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }

    #[test]
    fn test_session_key_comes_from_secret() {
        let secret = "kQ7#vR2!mZ9@pL4$wT6^yB1&nC8*hD3%xF5+gJ0=sU9~aE2?oI7<rY4>tW1|cV6;";
        let first = session_key(&config_with_secret(secret));
        let second = session_key(&config_with_secret(secret));

        assert!(first.is_ok());
        assert_eq!(
            first.ok().map(|k| k.signing().to_vec()),
            second.ok().map(|k| k.signing().to_vec())
        );
    }

    #[test]
    fn test_short_secret_cannot_sign() {
        let config = config_with_secret("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6%");
        assert!(matches!(session_key(&config), Err(KeyError::TooShort(32))));
    }
}
