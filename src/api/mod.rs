//! Slack Web API module.
//!
//! This module provides:
//! - HTTP client for the Slack Web API
//! - The `WorkspaceApi` trait the sync run is written against
//! - API response types

pub mod client;
pub mod types;
pub mod workspace;

pub use client::SlackApi;
pub use types::*;
pub use workspace::WorkspaceApi;
