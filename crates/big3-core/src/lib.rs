//! Core types for the Big3 team/agent API
//!
//! This crate holds the request and response shapes exchanged with the
//! orchestration service, independent of any HTTP transport:
//! - [`TeamConfig`], [`AgentConfig`] and [`Model`] describe what to create
//! - [`CreateTeamResponse`] and [`AddAgentResponse`] describe what comes back
//! - [`ValidationError`] reports structurally invalid input
//!
//! Configuration values validate on construction and can be re-checked with
//! `validate()` after being built by struct literal or deserialized.

pub mod error;
pub mod provider;
pub mod schema;

pub use error::ValidationError;
pub use provider::Provider;
pub use schema::{
    AddAgentResponse, AgentConfig, CreateTeamResponse, Model, Parameters, TeamConfig,
};
