//! Plans list screen.

use std::sync::Arc;

use tokio::sync::watch;

use super::replace_with;
use crate::api::{ApiClient, Plan};
use crate::repository::{HttpPlansRepository, PlansRepository};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlansState {
    pub is_loading: bool,
    pub plans: Vec<Plan>,
    pub error: Option<String>,
}

impl PlansState {
    /// Loaded successfully, but there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.is_loading && self.error.is_none() && self.plans.is_empty()
    }
}

/// Controller for the plans list screen.
pub struct PlansViewModel {
    plans: Arc<dyn PlansRepository>,
    state: watch::Sender<PlansState>,
}

impl PlansViewModel {
    pub fn new(plans: Arc<dyn PlansRepository>) -> Self {
        let (state, _) = watch::channel(PlansState::default());
        Self { plans, state }
    }

    pub fn from_api(api: &Arc<ApiClient>) -> Self {
        Self::new(Arc::new(HttpPlansRepository::new(Arc::clone(api))))
    }

    pub fn subscribe(&self) -> watch::Receiver<PlansState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> PlansState {
        self.state.borrow().clone()
    }

    /// Fetch every plan. Also used as the retry action.
    pub async fn load_plans(&self) {
        replace_with(&self.state, |s| {
            s.is_loading = true;
            s.error = None;
        });

        match self.plans.get_plans().await {
            Ok(plans) => {
                tracing::info!(count = plans.len(), "plans loaded");
                self.state.send_replace(PlansState {
                    is_loading: false,
                    plans,
                    error: None,
                });
            }
            Err(e) => {
                self.state.send_replace(PlansState {
                    is_loading: false,
                    plans: Vec::new(),
                    error: Some(e.to_string()),
                });
            }
        }
    }
}
