//! Schema types for the Big3 team/agent API
//!
//! Request bodies ([`TeamConfig`], [`AgentConfig`], [`Model`]) and the
//! response bodies the service returns for them.

mod agent_config;
mod model;
mod response;
mod team_config;

pub use agent_config::AgentConfig;
pub use model::{Model, Parameters};
pub use response::{AddAgentResponse, CreateTeamResponse};
pub use team_config::TeamConfig;
