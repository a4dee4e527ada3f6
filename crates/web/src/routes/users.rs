//! User detail page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};
use tracing::instrument;

use agriq_core::UserId;

use crate::{
    db::UserRepository,
    error::{AppError, Result},
    filters,
    middleware::RequestContext,
    models::User,
    state::AppState,
};

/// Build the users router.
pub fn router() -> Router<AppState> {
    Router::new().route("/users/{id}", get(show))
}

/// User detail template.
#[derive(Template, WebTemplate)]
#[template(path = "users/show.html")]
pub struct UserShowTemplate {
    pub ctx: RequestContext,
    pub user: User,
    pub joined: String,
}

/// User detail page handler.
///
/// # Errors
///
/// Returns 404 if no user has this ID, 500 if the query fails.
#[instrument(skip(ctx, state))]
pub async fn show(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<UserShowTemplate> {
    let user = UserRepository::new(state.pool())
        .get_by_id(UserId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;

    Ok(UserShowTemplate {
        ctx,
        joined: user.created_at.format("%Y-%m-%d").to_string(),
        user,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use agriq_core::UserRole;

    use super::*;

    #[test]
    fn test_user_template_renders_role() {
        let template = UserShowTemplate {
            ctx: RequestContext::anonymous("/users/1"),
            user: User {
                id: UserId::new(1),
                name: "Ana Ruiz".to_string(),
                email: "ana@agriq.test".to_string(),
                role: UserRole::Operator,
                active: true,
                created_at: Utc::now(),
            },
            joined: "2026-01-15".to_string(),
        };

        let html = template.render().unwrap();
        assert!(html.contains("Ana Ruiz"));
        assert!(html.contains("OPERATOR"));
    }
}
