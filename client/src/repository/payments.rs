//! Payments repository

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::RepoResult;
use crate::api::{segment, ApiClient, ApiResponse, Payment};

/// Read access to the payments recorded against a plan.
#[async_trait]
pub trait PaymentsRepository: Send + Sync {
    /// List the payments of a plan.
    ///
    /// The backend answers 404 when a plan has no payments yet; that is an
    /// empty list, not an error.
    async fn get_payments_by_plan(&self, plan_id: &str) -> RepoResult<Vec<Payment>>;
}

/// HTTP-backed [`PaymentsRepository`].
pub struct HttpPaymentsRepository {
    api: Arc<ApiClient>,
}

impl HttpPaymentsRepository {
    #[must_use]
    pub const fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PaymentsRepository for HttpPaymentsRepository {
    async fn get_payments_by_plan(&self, plan_id: &str) -> RepoResult<Vec<Payment>> {
        let path = format!("/payments/plan/{}", segment(plan_id));

        let payments = match self.api.get::<Vec<Payment>>(&path).await {
            Ok(ApiResponse::Failed(status)) if status == StatusCode::NOT_FOUND => {
                tracing::debug!(plan_id, "no payments recorded yet");
                Ok(None)
            }
            other => other.and_then(ApiResponse::into_result),
        }
        .inspect_err(|e| tracing::warn!(plan_id, error = %e, "failed to load payments"))?;

        Ok(payments.unwrap_or_default())
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

    use super::{async_trait, Payment, PaymentsRepository, RepoResult};
    use std::sync::Mutex;

    /// Mock implementation of [`PaymentsRepository`].
    pub struct MockPaymentsRepository {
        payments_result: Mutex<RepoResult<Vec<Payment>>>,
        get_payments_calls: Mutex<Vec<String>>,
    }

    impl MockPaymentsRepository {
        pub fn new() -> Self {
            Self {
                payments_result: Mutex::new(Ok(Vec::new())),
                get_payments_calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the result for `get_payments_by_plan` calls.
        pub fn set_payments_result(&self, result: RepoResult<Vec<Payment>>) {
            *self.payments_result.lock().unwrap() = result;
        }

        /// Get all plan IDs passed to `get_payments_by_plan`.
        pub fn get_payments_calls(&self) -> Vec<String> {
            self.get_payments_calls.lock().unwrap().clone()
        }
    }

    impl Default for MockPaymentsRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl PaymentsRepository for MockPaymentsRepository {
        async fn get_payments_by_plan(&self, plan_id: &str) -> RepoResult<Vec<Payment>> {
            self.get_payments_calls
                .lock()
                .unwrap()
                .push(plan_id.to_string());
            self.payments_result.lock().unwrap().clone()
        }
    }
}
