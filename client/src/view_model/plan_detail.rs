//! Plan detail screen: one plan, its members, its payments and its progress.

use std::sync::Arc;

use ahorros_progress::{
    progress_percent_rounded, progress_percentage, remaining_amount, total_collected,
};
use tokio::sync::watch;

use super::replace_with;
use crate::api::{ApiClient, CreateMemberRequest, Member, Payment, Plan};
use crate::repository::{
    HttpMembersRepository, HttpPaymentsRepository, HttpPlansRepository, MembersRepository,
    PaymentsRepository, PlansRepository,
};

/// Where the member-creation flow stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MemberCreation {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Local validation or the backend rejected the member
    Failed(String),
}

/// Snapshot rendered by the plan detail screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanDetailState {
    pub is_loading: bool,
    pub plan: Option<Plan>,
    pub members: Vec<Member>,
    pub payments: Vec<Payment>,
    pub error: Option<String>,
    pub member_creation: MemberCreation,
}

impl PlanDetailState {
    /// Sum of every payment currently loaded.
    #[must_use]
    pub fn total_collected(&self) -> i64 {
        total_collected(self.payments.iter().map(|p| p.amount))
    }

    /// Progress toward the plan target in `[0, 100]`; `0` without a plan.
    #[must_use]
    pub fn progress_percentage(&self) -> f64 {
        self.plan.as_ref().map_or(0.0, |plan| {
            progress_percentage(self.total_collected(), plan.target_amount)
        })
    }

    /// [`Self::progress_percentage`] as a whole percent, halves rounding up.
    #[must_use]
    pub fn progress_percent_rounded(&self) -> u8 {
        self.plan.as_ref().map_or(0, |plan| {
            progress_percent_rounded(self.total_collected(), plan.target_amount)
        })
    }

    /// Amount still missing to reach the target.
    #[must_use]
    pub fn remaining_amount(&self) -> i64 {
        self.plan.as_ref().map_or(0, |plan| {
            remaining_amount(self.total_collected(), plan.target_amount)
        })
    }

    #[must_use]
    pub fn member_creation_error(&self) -> Option<&str> {
        match &self.member_creation {
            MemberCreation::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn member_creation_succeeded(&self) -> bool {
        self.member_creation == MemberCreation::Succeeded
    }
}

/// Reasons a new member is rejected before reaching the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MemberValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("contribution must be greater than 0")]
    NonPositiveContribution,
}

/// Validate member input locally.
///
/// # Errors
///
/// Returns [`MemberValidationError`] if the name is blank or the monthly
/// contribution is not positive.
pub fn validate_new_member(
    name: &str,
    contribution_per_month: i64,
) -> Result<(), MemberValidationError> {
    if name.trim().is_empty() {
        return Err(MemberValidationError::EmptyName);
    }

    if contribution_per_month <= 0 {
        return Err(MemberValidationError::NonPositiveContribution);
    }

    Ok(())
}

/// Controller for the plan detail screen.
///
/// Reads run strictly in order: plan, then members, then payments. A missing
/// plan fails the whole screen; failed member or payment reads leave those
/// lists empty and the screen still renders.
pub struct PlanDetailViewModel {
    plans: Arc<dyn PlansRepository>,
    members: Arc<dyn MembersRepository>,
    payments: Arc<dyn PaymentsRepository>,
    state: watch::Sender<PlanDetailState>,
}

impl PlanDetailViewModel {
    pub fn new(
        plans: Arc<dyn PlansRepository>,
        members: Arc<dyn MembersRepository>,
        payments: Arc<dyn PaymentsRepository>,
    ) -> Self {
        let (state, _) = watch::channel(PlanDetailState::default());
        Self {
            plans,
            members,
            payments,
            state,
        }
    }

    /// Wire the HTTP repositories around a shared API client.
    pub fn from_api(api: &Arc<ApiClient>) -> Self {
        Self::new(
            Arc::new(HttpPlansRepository::new(Arc::clone(api))),
            Arc::new(HttpMembersRepository::new(Arc::clone(api))),
            Arc::new(HttpPaymentsRepository::new(Arc::clone(api))),
        )
    }

    /// Receive every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<PlanDetailState> {
        self.state.subscribe()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> PlanDetailState {
        self.state.borrow().clone()
    }

    /// Load the plan, then its members, then its payments.
    pub async fn load_all(&self, plan_id: &str) {
        tracing::info!(plan_id, "loading plan detail");
        replace_with(&self.state, |s| {
            s.is_loading = true;
            s.error = None;
        });

        let plan = match self.plans.get_plan_by_id(plan_id).await {
            Ok(plan) => plan,
            Err(e) => {
                self.state.send_replace(PlanDetailState {
                    error: Some(e.to_string()),
                    ..PlanDetailState::default()
                });
                return;
            }
        };
        replace_with(&self.state, |s| {
            // Lists of another plan must not be shown against this one.
            if s.plan.as_ref().is_some_and(|current| current.id != plan.id) {
                s.members.clear();
                s.payments.clear();
            }
            s.plan = Some(plan);
        });

        self.load_members(plan_id).await;
        self.load_payments(plan_id).await;

        replace_with(&self.state, |s| s.is_loading = false);
    }

    async fn load_members(&self, plan_id: &str) {
        let members = self
            .members
            .get_members_by_plan(plan_id)
            .await
            .unwrap_or_else(|e| {
                tracing::debug!(plan_id, error = %e, "showing plan without members");
                Vec::new()
            });
        replace_with(&self.state, |s| s.members = members);
    }

    async fn load_payments(&self, plan_id: &str) {
        let payments = self
            .payments
            .get_payments_by_plan(plan_id)
            .await
            .unwrap_or_else(|e| {
                tracing::debug!(plan_id, error = %e, "showing plan without payments");
                Vec::new()
            });
        replace_with(&self.state, |s| s.payments = payments);
    }

    /// Add a member to the loaded plan, then reload the member list.
    ///
    /// Input is validated before any request is made. Does nothing when no
    /// plan is loaded.
    pub async fn create_member(&self, name: &str, contribution_per_month: i64) {
        let plan_id = self.state.borrow().plan.as_ref().map(|p| p.id.clone());
        let Some(plan_id) = plan_id else {
            tracing::warn!("member creation requested before a plan was loaded");
            return;
        };

        if let Err(e) = validate_new_member(name, contribution_per_month) {
            replace_with(&self.state, |s| {
                s.member_creation = MemberCreation::Failed(e.to_string());
            });
            return;
        }

        replace_with(&self.state, |s| s.member_creation = MemberCreation::Submitting);

        let request = CreateMemberRequest {
            name: name.trim().to_string(),
            plan_id: plan_id.clone(),
            contribution_per_month,
        };

        match self.members.create_member(&request).await {
            Ok(_) => {
                replace_with(&self.state, |s| s.member_creation = MemberCreation::Succeeded);
                // The server list is authoritative; refetch instead of appending.
                self.load_members(&plan_id).await;
            }
            Err(e) => {
                replace_with(&self.state, |s| {
                    s.member_creation = MemberCreation::Failed(e.to_string());
                });
            }
        }
    }

    /// Forget the last creation result once it has been shown.
    pub fn clear_member_creation_state(&self) {
        replace_with(&self.state, |s| s.member_creation = MemberCreation::Idle);
    }
}
