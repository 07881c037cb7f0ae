//! Savings backend API: transport, wire types and the error users see.
//!
//! | Method | Path                      | Response        |
//! |--------|---------------------------|-----------------|
//! | GET    | `/plans`                  | `[Plan]`        |
//! | GET    | `/plans/{id}`             | `Plan`          |
//! | GET    | `/members/plan/{planId}`  | `[Member]`      |
//! | POST   | `/members`                | `Member`        |
//! | GET    | `/payments/plan/{planId}` | `[Payment]`     |

mod client;
mod error;
mod types;

pub(crate) use client::segment;
pub use client::{ApiClient, ApiResponse};
pub use error::ApiError;
pub use types::{CreateMemberRequest, Member, Payment, Plan};
