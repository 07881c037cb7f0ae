//! Ties controller work to the lifetime of an open screen.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinSet;

use super::plan_detail::{PlanDetailState, PlanDetailViewModel};

/// An open plan detail screen.
///
/// Loads and member creations are spawned onto the current Tokio runtime and
/// tracked here. Closing or dropping the session aborts whatever is still in
/// flight, so a late response is never applied after the screen is gone.
pub struct PlanDetailSession {
    view_model: Arc<PlanDetailViewModel>,
    tasks: JoinSet<()>,
}

impl PlanDetailSession {
    #[must_use]
    pub fn new(view_model: Arc<PlanDetailViewModel>) -> Self {
        Self {
            view_model,
            tasks: JoinSet::new(),
        }
    }

    /// Receive every snapshot the screen should render.
    #[must_use]
    pub fn state(&self) -> watch::Receiver<PlanDetailState> {
        self.view_model.subscribe()
    }

    /// Start loading a plan. Also used as the retry action.
    pub fn load(&mut self, plan_id: impl Into<String>) {
        let plan_id = plan_id.into();
        let view_model = Arc::clone(&self.view_model);
        self.spawn(async move { view_model.load_all(&plan_id).await });
    }

    /// Start creating a member on the loaded plan.
    pub fn create_member(&mut self, name: impl Into<String>, contribution_per_month: i64) {
        let name = name.into();
        let view_model = Arc::clone(&self.view_model);
        self.spawn(async move {
            view_model
                .create_member(&name, contribution_per_month)
                .await;
        });
    }

    pub fn clear_member_creation_state(&self) {
        self.view_model.clear_member_creation_state();
    }

    /// Wait until every spawned operation has finished.
    pub async fn wait_idle(&mut self) {
        while let Some(result) = self.tasks.join_next().await {
            if let Err(e) = result {
                tracing::error!(error = %e, "plan detail task failed");
            }
        }
    }

    /// Close the screen, abandoning in-flight work.
    pub fn close(mut self) {
        self.abort_in_flight();
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        // Reap finished tasks so the set only tracks live work.
        while self.tasks.try_join_next().is_some() {}
        self.tasks.spawn(task);
    }

    fn abort_in_flight(&mut self) {
        if !self.tasks.is_empty() {
            tracing::debug!(tasks = self.tasks.len(), "aborting in-flight plan detail work");
        }
        self.tasks.abort_all();
    }
}

impl Drop for PlanDetailSession {
    fn drop(&mut self) {
        self.abort_in_flight();
    }
}
