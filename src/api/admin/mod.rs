//! Super-admin API endpoints

pub mod super_admin;

use axum::{
    routing::{get, put},
    Router,
};

use super::state::AppState;

/// Routes under `/super-admin`
pub fn create_super_admin_router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(super_admin::get_stats))
        .route("/list-users", get(super_admin::list_users))
        .route("/user-status/{username}", put(super_admin::edit_user_status))
        .route("/list-teams", get(super_admin::list_teams))
        .route("/team/{teamId}", get(super_admin::get_team))
}
