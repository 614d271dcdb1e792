//! Backend API access for the review dashboard.
//!
//! This module wraps the review backend's HTTP/JSON interface. It parses
//! the configured base URL, performs the read and trigger operations the
//! dashboard needs, and maps failures into user-friendly variants so that
//! callers can surface precise errors without exposing transport internals.

pub mod error;
pub mod gateway;
pub mod models;

pub use error::DashboardError;
pub use gateway::{BackendGateway, BackendStatus, HttpBackendGateway};
pub use models::{PullRequest, Repository, ReviewIssue, TriggerOutcome};

#[cfg(test)]
pub use gateway::MockBackendGateway;
