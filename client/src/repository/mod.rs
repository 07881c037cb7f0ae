//! Repository layer over the savings backend.
//!
//! Each repository wraps one remote call and returns either the data or an
//! [`ApiError`] whose message is ready to show to the user.

pub mod members;
pub mod payments;
pub mod plans;

use crate::api::ApiError;

pub use members::{HttpMembersRepository, MembersRepository};
pub use payments::{HttpPaymentsRepository, PaymentsRepository};
pub use plans::{HttpPlansRepository, PlansRepository};

/// Outcome of a repository call.
pub type RepoResult<T> = Result<T, ApiError>;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    pub use super::members::mock::MockMembersRepository;
    pub use super::payments::mock::MockPaymentsRepository;
    pub use super::plans::mock::MockPlansRepository;
}
