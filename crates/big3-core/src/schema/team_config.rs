//! Team configuration schema

use crate::error::{ValidationError, require_non_empty};
use serde::{Deserialize, Serialize};

/// Team to create
///
/// Sent as the body of `POST /teams`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    /// Team name (globally unique; uniqueness is enforced server-side)
    pub name: String,

    /// Human-readable team purpose
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TeamConfig {
    /// Create a validated team configuration.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let config = Self {
            name: name.into(),
            description: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check required fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("team.name", &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_config_roundtrip_minimal() {
        let config = TeamConfig::new("ops").unwrap();
        let serialized = serde_json::to_string(&config).unwrap();
        assert_eq!(serialized, r#"{"name":"ops"}"#);

        let reparsed: TeamConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_team_config_roundtrip_complete() {
        let config = TeamConfig::new("ops")
            .unwrap()
            .with_description("On-call triage agents");
        let value = serde_json::to_value(&config).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["name", "description"]);

        let reparsed: TeamConfig = serde_json::from_value(value).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_team_config_empty_name_rejected() {
        let err = TeamConfig::new("").unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "team.name" });
    }

    #[test]
    fn test_team_config_missing_name_fails_to_parse() {
        let result: Result<TeamConfig, _> = serde_json::from_str(r#"{"description": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_team_config_wrong_type_fails_to_parse() {
        let result: Result<TeamConfig, _> = serde_json::from_str(r#"{"name": 42}"#);
        assert!(result.is_err());
    }
}
