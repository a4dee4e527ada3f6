//! Request-scoped context extractor.
//!
//! [`RequestContext`] resolves the signed-in user once per request: the
//! session holds only the user ID, and the user row is loaded from the
//! database each time the extractor runs. Nothing is cached between
//! requests.

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::Serialize;
use tower_sessions::Session;

use agriq_core::{UserId, UserRole};

use crate::db::UserRepository;
use crate::error::{AppError, set_sentry_user};
use crate::models::{User, session_keys};
use crate::state::AppState;

/// The signed-in user as shown in page chrome.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub name: String,
    pub role: UserRole,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
        }
    }
}

/// Per-request context handed to page templates.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Path of the current request, used to highlight navigation.
    pub current_path: String,
    /// The signed-in user, if the session names an active one.
    pub user: Option<CurrentUser>,
}

impl RequestContext {
    /// Context for a request path with nobody signed in.
    #[must_use]
    pub fn anonymous(path: impl Into<String>) -> Self {
        Self {
            current_path: path.into(),
            user: None,
        }
    }

    /// Whether `prefix` is the active navigation section.
    #[must_use]
    pub fn is_active(&self, prefix: &str) -> bool {
        if prefix == "/" {
            self.current_path == "/"
        } else {
            self.current_path.starts_with(prefix)
        }
    }
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let current_path = parts.uri.path().to_string();

        // No session layer (or an unreadable session) means nobody is signed in.
        let user_id = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<UserId>(session_keys::USER_ID)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        let Some(user_id) = user_id else {
            return Ok(Self::anonymous(current_path));
        };

        let user = UserRepository::new(state.pool())
            .get_by_id(user_id)
            .await?
            .filter(|user| user.active);

        if let Some(user) = &user {
            set_sentry_user(&user.id, Some(&user.email));
        } else {
            tracing::debug!(%user_id, "session names a missing or inactive user");
        }

        Ok(Self {
            current_path,
            user: user.map(CurrentUser::from),
        })
    }
}
