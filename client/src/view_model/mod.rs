//! Screen controllers.
//!
//! A controller owns the state of one screen and is its only writer. State is
//! published through a [`tokio::sync::watch`] channel and always replaced
//! whole, so a subscriber never observes a half-applied update.

pub mod plan_detail;
pub mod plans;
pub mod session;

pub use plan_detail::{
    validate_new_member, MemberCreation, MemberValidationError, PlanDetailState,
    PlanDetailViewModel,
};
pub use plans::{PlansState, PlansViewModel};
pub use session::PlanDetailSession;

use tokio::sync::watch;

/// Publish a modified copy of the current state.
fn replace_with<T: Clone>(state: &watch::Sender<T>, f: impl FnOnce(&mut T)) {
    // The read guard must be released before send_replace takes the write lock.
    let mut next = state.borrow().clone();
    f(&mut next);
    state.send_replace(next);
}
