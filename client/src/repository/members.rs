//! Members repository

use std::sync::Arc;

use async_trait::async_trait;

use super::RepoResult;
use crate::api::{segment, ApiClient, ApiError, CreateMemberRequest, Member};

/// Access to the members of a plan.
#[async_trait]
pub trait MembersRepository: Send + Sync {
    /// List the members of a plan. An absent body is an empty list.
    async fn get_members_by_plan(&self, plan_id: &str) -> RepoResult<Vec<Member>>;

    /// Create a member and return it as stored by the backend.
    async fn create_member(&self, request: &CreateMemberRequest) -> RepoResult<Member>;
}

/// HTTP-backed [`MembersRepository`].
pub struct HttpMembersRepository {
    api: Arc<ApiClient>,
}

impl HttpMembersRepository {
    #[must_use]
    pub const fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl MembersRepository for HttpMembersRepository {
    async fn get_members_by_plan(&self, plan_id: &str) -> RepoResult<Vec<Member>> {
        let path = format!("/members/plan/{}", segment(plan_id));

        let members = self
            .api
            .get::<Vec<Member>>(&path)
            .await
            .and_then(|response| response.into_result())
            .inspect_err(|e| tracing::warn!(plan_id, error = %e, "failed to load members"))?;

        Ok(members.unwrap_or_default())
    }

    async fn create_member(&self, request: &CreateMemberRequest) -> RepoResult<Member> {
        let member = self
            .api
            .post::<_, Member>("/members", request)
            .await
            .and_then(|response| response.into_result())
            .and_then(|member| member.ok_or(ApiError::EmptyBody))
            .inspect_err(|e| {
                tracing::warn!(plan_id = %request.plan_id, error = %e, "failed to create member");
            })?;

        tracing::info!(member_id = %member.id, plan_id = %member.plan_id, "member created");
        Ok(member)
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

    use super::{async_trait, CreateMemberRequest, Member, MembersRepository, RepoResult};
    use std::sync::Mutex;

    /// Mock implementation of [`MembersRepository`].
    ///
    /// When no creation result is set, `create_member` echoes the request
    /// back as a member with ID `"new-member"`.
    pub struct MockMembersRepository {
        members_result: Mutex<RepoResult<Vec<Member>>>,
        create_result: Mutex<Option<RepoResult<Member>>>,
        get_members_calls: Mutex<Vec<String>>,
        create_calls: Mutex<Vec<CreateMemberRequest>>,
    }

    impl MockMembersRepository {
        pub fn new() -> Self {
            Self {
                members_result: Mutex::new(Ok(Vec::new())),
                create_result: Mutex::new(None),
                get_members_calls: Mutex::new(Vec::new()),
                create_calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the result for `get_members_by_plan` calls.
        pub fn set_members_result(&self, result: RepoResult<Vec<Member>>) {
            *self.members_result.lock().unwrap() = result;
        }

        /// Set the result for `create_member` calls.
        pub fn set_create_result(&self, result: RepoResult<Member>) {
            *self.create_result.lock().unwrap() = Some(result);
        }

        /// Get all plan IDs passed to `get_members_by_plan`.
        pub fn get_members_calls(&self) -> Vec<String> {
            self.get_members_calls.lock().unwrap().clone()
        }

        /// Get all requests passed to `create_member`.
        pub fn create_calls(&self) -> Vec<CreateMemberRequest> {
            self.create_calls.lock().unwrap().clone()
        }
    }

    impl Default for MockMembersRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl MembersRepository for MockMembersRepository {
        async fn get_members_by_plan(&self, plan_id: &str) -> RepoResult<Vec<Member>> {
            self.get_members_calls
                .lock()
                .unwrap()
                .push(plan_id.to_string());
            self.members_result.lock().unwrap().clone()
        }

        async fn create_member(&self, request: &CreateMemberRequest) -> RepoResult<Member> {
            self.create_calls.lock().unwrap().push(request.clone());

            self.create_result.lock().unwrap().clone().unwrap_or_else(|| {
                Ok(Member {
                    id: "new-member".to_string(),
                    name: request.name.clone(),
                    plan_id: request.plan_id.clone(),
                    contribution_per_month: request.contribution_per_month,
                    joined_at: "2025-01-01".to_string(),
                })
            })
        }
    }
}
