//! Agent configuration schema

use super::Model;
use crate::error::{ValidationError, require_non_empty};
use serde::{Deserialize, Serialize};

/// Agent to register within a team
///
/// Sent as the body of `POST /teams/{team_id}/agents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Agent name (unique within team; uniqueness is enforced server-side)
    pub name: String,

    /// Model the agent runs on
    pub model: Model,

    /// System instructions for the agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl AgentConfig {
    /// Create a validated agent configuration.
    pub fn new(name: impl Into<String>, model: Model) -> Result<Self, ValidationError> {
        let config = Self {
            name: name.into(),
            model,
            instructions: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Attach free-text instructions.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Check required fields, including the nested model.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("agent.name", &self.name)?;
        self.model.validate()
    }
}
