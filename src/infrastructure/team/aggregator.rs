//! Team and plan aggregation across directory identities

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::billing::{Plan, Subscription, SubscriptionResolver};
use crate::domain::directory::DirectoryUser;
use crate::domain::team::{Team, TeamRepository};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// A team with the plan its subscription resolves to
#[derive(Debug, Clone, PartialEq)]
pub struct TeamWithPlan {
    pub team: Team,
    pub plan: Plan,
}

/// Flat list entry as exposed by the admin API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: String,
    pub display_name: String,
    pub stripe_customer_id: Option<String>,
    pub plan_id: String,
    pub plan_name: String,
}

impl From<TeamWithPlan> for TeamSummary {
    fn from(entry: TeamWithPlan) -> Self {
        Self {
            id: entry.team.id().to_string(),
            display_name: entry.team.display_name().to_string(),
            stripe_customer_id: entry.team.stripe_customer_id().map(str::to_string),
            plan_id: entry.plan.id,
            plan_name: entry.plan.name,
        }
    }
}

/// Joins directory identities with internal users, teams and plans
#[derive(Debug, Clone)]
pub struct TeamAggregator {
    users: Arc<dyn UserRepository>,
    teams: Arc<dyn TeamRepository>,
    plans: Arc<dyn SubscriptionResolver>,
}

impl TeamAggregator {
    pub fn new(
        users: Arc<dyn UserRepository>,
        teams: Arc<dyn TeamRepository>,
        plans: Arc<dyn SubscriptionResolver>,
    ) -> Self {
        Self {
            users,
            teams,
            plans,
        }
    }

    /// Plan for a subscription; total, absent means free
    pub fn plan_from_subscription(&self, subscription: Option<&Subscription>) -> Plan {
        self.plans.plan_for(subscription)
    }

    /// The user's teams in store order, each with its plan
    pub async fn teams_for_user(&self, user: &User) -> Result<Vec<TeamWithPlan>, DomainError> {
        let teams = self.teams.find_many_by_ids(user.team_list()).await?;

        Ok(teams
            .into_iter()
            .map(|team| {
                let plan = self.plan_from_subscription(team.subscription());
                TeamWithPlan { team, plan }
            })
            .collect())
    }

    /// Teams of the internal user behind a directory identity
    ///
    /// Absent identities and identities without an internal user yield an
    /// empty list.
    pub async fn teams_for_identity(
        &self,
        identity_id: Option<&str>,
    ) -> Result<Vec<TeamWithPlan>, DomainError> {
        let Some(id) = identity_id.and_then(|id| UserId::new(id).ok()) else {
            return Ok(Vec::new());
        };

        match self.users.find_by_identity(&id).await? {
            Some(user) => self.teams_for_user(&user).await,
            None => Ok(Vec::new()),
        }
    }

    /// Concatenated teams of all identities, in identity order
    ///
    /// Identities are resolved one after another, never concurrently. The
    /// first store failure aborts the call and drops what was gathered.
    pub async fn all_teams_across_identities(
        &self,
        identities: &[DirectoryUser],
    ) -> Result<Vec<TeamWithPlan>, DomainError> {
        let mut all = Vec::new();

        for identity in identities {
            let found = self
                .teams_for_identity(identity.external_id.as_deref())
                .await?;
            all.extend(found);
        }

        debug!(
            identities = identities.len(),
            teams = all.len(),
            "Aggregated teams across identities"
        );

        Ok(all)
    }
}
