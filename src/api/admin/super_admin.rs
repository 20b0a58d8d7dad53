//! Super-admin endpoints
//!
//! Every handler authenticates the caller, validates the request, then asks
//! the authorization gate before touching any data.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::middleware::CallerIdentity;
use crate::api::state::AppState;
use crate::api::types::{ApiError, RequestShape, Validated};
use crate::domain::member::{Member, MemberRole, MemberStatus};
use crate::domain::team::TeamId;
use crate::domain::{
    DirectoryPage, DomainError, FieldRule, ObjectSchema, PaginationToken, RequestSchemas,
};
use crate::infrastructure::billing::{
    sample_revenue, RevenuePoint, SAMPLE_CUSTOMERS, SAMPLE_MRR, SAMPLE_TOTAL_REVENUE,
};
use crate::infrastructure::team::TeamSummary;

// Request shapes

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub pagination_token: Option<String>,
}

/// `?paginationToken=` on the listing endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ListRequest {
    pub query: ListQuery,
}

impl RequestShape for ListRequest {
    fn schemas() -> RequestSchemas {
        RequestSchemas::new()
            .query(ObjectSchema::new().field(FieldRule::string("paginationToken").optional()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsernameParams {
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserStatusBody {
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserStatusRequest {
    pub params: UsernameParams,
    pub body: UserStatusBody,
}

impl RequestShape for UserStatusRequest {
    fn schemas() -> RequestSchemas {
        RequestSchemas::new()
            .params(ObjectSchema::new().field(FieldRule::string("username").nonempty()))
            .body(ObjectSchema::new().field(FieldRule::coerce_boolean("enabled")))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamParams {
    pub team_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamDetailRequest {
    pub params: TeamParams,
}

impl RequestShape for TeamDetailRequest {
    fn schemas() -> RequestSchemas {
        RequestSchemas::new().params(ObjectSchema::new().field(FieldRule::string("teamId").nonempty()))
    }
}

// Responses

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub estimated_total_users: i64,
    pub customers: i64,
    pub mrr: i64,
    pub total_revenue: i64,
    pub revenue: Vec<RevenuePoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamListResponse {
    pub team_list: Vec<TeamSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<PaginationToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub member_id: String,
    pub email: String,
    pub role: MemberRole,
    pub status: MemberStatus,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            member_id: member.member_id().to_string(),
            email: member.email().to_string(),
            role: member.role(),
            status: member.status(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetailResponse {
    pub name: String,
    pub member_list: Vec<MemberResponse>,
}

// Handlers

/// GET /super-admin/stats
pub async fn get_stats(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<StatsResponse>, ApiError> {
    state.gate.require_super_admin(caller.as_str()).await?;

    let estimated_total_users = state.directory.estimate_user_count().await?;

    Ok(Json(StatsResponse {
        estimated_total_users,
        customers: SAMPLE_CUSTOMERS,
        mrr: SAMPLE_MRR,
        total_revenue: SAMPLE_TOTAL_REVENUE,
        revenue: sample_revenue(Utc::now()),
    }))
}

/// GET /super-admin/list-users
pub async fn list_users(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Validated(request): Validated<ListRequest>,
) -> Result<Json<DirectoryPage>, ApiError> {
    state.gate.require_super_admin(caller.as_str()).await?;

    let token = request.query.pagination_token.map(PaginationToken::from);
    debug!(has_token = token.is_some(), "Super admin listing users");

    let page = state.directory.list_users(token, None).await?;

    Ok(Json(page))
}

/// PUT /super-admin/user-status/{username}
pub async fn edit_user_status(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Validated(request): Validated<UserStatusRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.gate.require_super_admin(caller.as_str()).await?;

    let username = request.params.username;
    let enabled = request.body.enabled;

    state.directory.set_user_enabled(&username, enabled).await?;

    info!(
        caller = %caller.as_str(),
        username = %username,
        enabled,
        "Super admin changed user status"
    );

    Ok(Json(SuccessResponse { success: true }))
}

/// GET /super-admin/list-teams
///
/// Lists one directory page, then gathers the teams of every listed identity.
pub async fn list_teams(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Validated(request): Validated<ListRequest>,
) -> Result<Json<TeamListResponse>, ApiError> {
    state.gate.require_super_admin(caller.as_str()).await?;

    let token = request.query.pagination_token.map(PaginationToken::from);
    let page = state.directory.list_users(token, None).await?;

    let teams = state
        .aggregator
        .all_teams_across_identities(&page.users)
        .await?;

    Ok(Json(TeamListResponse {
        team_list: teams.into_iter().map(TeamSummary::from).collect(),
        pagination_token: page.next_token,
    }))
}

/// GET /super-admin/team/{teamId}
pub async fn get_team(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Validated(request): Validated<TeamDetailRequest>,
) -> Result<Json<TeamDetailResponse>, ApiError> {
    state.gate.require_super_admin(caller.as_str()).await?;

    let raw_id = request.params.team_id;
    // An id that can never have been issued cannot name a team
    let team_id = TeamId::new(raw_id.as_str()).map_err(|_| DomainError::team_not_found(&raw_id))?;

    let team = state
        .teams
        .find_by_id(&team_id)
        .await?
        .ok_or_else(|| DomainError::team_not_found(&team_id))?;

    let members = state.members.find_all_by_team(&team_id).await?;

    Ok(Json(TeamDetailResponse {
        name: team.display_name().to_string(),
        member_list: members.iter().map(MemberResponse::from).collect(),
    }))
}
