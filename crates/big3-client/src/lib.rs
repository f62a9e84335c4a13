//! Blocking HTTP client for the Big3 team/agent orchestration API
//!
//! Two calls are exposed, each as a free function and as a method on a
//! reusable [`Big3Client`]:
//! - [`create_team`]: `POST {base_url}/teams`
//! - [`add_agent`]: `POST {base_url}/teams/{team_id}/agents`
//!
//! ```no_run
//! use big3_client::{add_agent, create_team};
//! use big3_core::{AgentConfig, Model, Provider, TeamConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let base = "http://localhost:3000/api";
//! let team = TeamConfig::new("ops")?.with_description("On-call triage");
//! let team_id = create_team(base, &team, Some("sk-test"))?;
//!
//! let model = Model::new(Provider::Anthropic, "claude-sonnet-4")?
//!     .with_parameter("temperature", 0.2);
//! let agent = AgentConfig::new("triage", model)?;
//! let agent_id = add_agent(base, &team_id, &agent, Some("sk-test"))?;
//! # let _ = agent_id;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logging;

pub use client::{Big3Client, add_agent, create_team};
pub use config::ClientConfig;
pub use error::Big3Error;

// Re-export the schema crate so callers need only one dependency
pub use big3_core;
