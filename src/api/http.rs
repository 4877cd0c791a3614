//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::rest::{
    activity, audit, invitations, password_reset, permissions, preferences, profiles, roles,
    sessions, teams, users,
};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // Any origin, method and header
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Users and their grants
        .route("/users", post(users::create_user).get(users::list_users))
        .route("/users/:id", get(users::get_user).put(users::update_user))
        .route(
            "/users/:id/permissions",
            post(permissions::grant_permission).get(permissions::list_user_permissions),
        )
        .route(
            "/users/:id/permissions/:permission_id",
            delete(permissions::revoke_permission),
        )
        // Roles
        .route("/roles", post(roles::create_role).get(roles::list_roles))
        .route("/roles/:id", get(roles::get_role))
        // Profiles
        .route("/profiles", post(profiles::create_profile))
        .route(
            "/profiles/user/:user_id",
            get(profiles::get_profile).put(profiles::update_profile),
        )
        // Teams
        .route("/teams", post(teams::create_team).get(teams::list_teams))
        .route("/teams/:id", get(teams::get_team))
        .route(
            "/teams/:id/members",
            post(teams::add_member).get(teams::list_members),
        )
        // Logs
        .route("/audit-logs", get(audit::list_audit_logs))
        .route("/activity-logs", post(activity::create_activity))
        .route(
            "/activity-logs/user/:user_id",
            get(activity::list_user_activity),
        )
        // Password reset
        .route("/password-reset/request", post(password_reset::request_reset))
        .route("/password-reset/reset", post(password_reset::reset_password))
        // Sessions
        .route("/sessions", post(sessions::create_session))
        .route("/sessions/user/:user_id", get(sessions::list_user_sessions))
        .route("/sessions/:token", delete(sessions::delete_session))
        // Preferences
        .route("/preferences", post(preferences::create_preferences))
        .route(
            "/preferences/user/:user_id",
            get(preferences::get_preferences).put(preferences::update_preferences),
        )
        // Invitations
        .route("/invitations", post(invitations::create_invitation))
        .route("/invitations/pending", get(invitations::list_pending))
        .route("/invitations/:token", get(invitations::get_invitation))
        .route(
            "/invitations/:token/accept",
            post(invitations::accept_invitation),
        )
        .route(
            "/invitations/:token/revoke",
            post(invitations::revoke_invitation),
        )
        // Permission catalog
        .route("/permissions", get(permissions::list_permissions))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::Store;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let state = Arc::new(AppState::new(Store::new(), AppConfig::default()));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let state = Arc::new(AppState::new(Store::new(), AppConfig::default()));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
    }
}
