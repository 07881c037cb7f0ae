//! Common test utilities for integration tests.
//!
//! This module provides:
//!
//! - [`http_mock::MockHttpServer`] - Stub the savings backend over real HTTP
//! - [`factories`] - Build plans, members and payments with sensible defaults
//!
//! Controller tests use the mock repositories from the crate's `test-utils`
//! feature instead of HTTP:
//!
//! ```ignore
//! use ahorros_client::repository::mock::MockPlansRepository;
//!
//! let plans = Arc::new(MockPlansRepository::new());
//! plans.set_plan_result(Ok(factories::plan(1_000_000)));
//! ```

#![allow(dead_code)]

pub mod factories;
pub mod http_mock;
