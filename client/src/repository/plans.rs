//! Plans repository

use std::sync::Arc;

use async_trait::async_trait;

use super::RepoResult;
use crate::api::{segment, ApiClient, ApiError, Plan};

/// Read access to savings plans.
#[async_trait]
pub trait PlansRepository: Send + Sync {
    /// List every plan. An absent body is an empty list.
    async fn get_plans(&self) -> RepoResult<Vec<Plan>>;

    /// Fetch one plan by ID.
    async fn get_plan_by_id(&self, plan_id: &str) -> RepoResult<Plan>;
}

/// HTTP-backed [`PlansRepository`].
pub struct HttpPlansRepository {
    api: Arc<ApiClient>,
}

impl HttpPlansRepository {
    #[must_use]
    pub const fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PlansRepository for HttpPlansRepository {
    async fn get_plans(&self) -> RepoResult<Vec<Plan>> {
        let plans = self
            .api
            .get::<Vec<Plan>>("/plans")
            .await
            .and_then(|response| response.into_result())
            .inspect_err(|e| tracing::warn!(error = %e, "failed to load plans"))?;

        Ok(plans.unwrap_or_default())
    }

    async fn get_plan_by_id(&self, plan_id: &str) -> RepoResult<Plan> {
        let path = format!("/plans/{}", segment(plan_id));

        self.api
            .get::<Plan>(&path)
            .await
            .and_then(|response| response.into_result())
            .and_then(|plan| plan.ok_or(ApiError::EmptyBody))
            .inspect_err(|e| tracing::warn!(plan_id, error = %e, "failed to load plan"))
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{async_trait, ApiError, Plan, PlansRepository, RepoResult};
    use std::sync::Mutex;

    /// Mock implementation of [`PlansRepository`].
    ///
    /// Results are returned on every call until replaced.
    pub struct MockPlansRepository {
        plans_result: Mutex<RepoResult<Vec<Plan>>>,
        plan_result: Mutex<RepoResult<Plan>>,
        get_plan_calls: Mutex<Vec<String>>,
    }

    impl MockPlansRepository {
        pub fn new() -> Self {
            Self {
                plans_result: Mutex::new(Ok(Vec::new())),
                plan_result: Mutex::new(Err(ApiError::Unexpected("not set".into()))),
                get_plan_calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the result for `get_plans` calls.
        pub fn set_plans_result(&self, result: RepoResult<Vec<Plan>>) {
            *self.plans_result.lock().unwrap() = result;
        }

        /// Set the result for `get_plan_by_id` calls.
        pub fn set_plan_result(&self, result: RepoResult<Plan>) {
            *self.plan_result.lock().unwrap() = result;
        }

        /// Get all IDs passed to `get_plan_by_id`.
        pub fn get_plan_calls(&self) -> Vec<String> {
            self.get_plan_calls.lock().unwrap().clone()
        }
    }

    impl Default for MockPlansRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl PlansRepository for MockPlansRepository {
        async fn get_plans(&self) -> RepoResult<Vec<Plan>> {
            self.plans_result.lock().unwrap().clone()
        }

        async fn get_plan_by_id(&self, plan_id: &str) -> RepoResult<Plan> {
            self.get_plan_calls.lock().unwrap().push(plan_id.to_string());
            self.plan_result.lock().unwrap().clone()
        }
    }
}
