//! Model configuration schema

use crate::error::{ValidationError, require_non_empty};
use crate::provider::Provider;
use serde::{Deserialize, Serialize};

/// Provider-specific tuning fields (e.g. `temperature`, `max_tokens`).
///
/// An ordered JSON object: keys keep the order they were inserted in.
pub type Parameters = serde_json::Map<String, serde_json::Value>;

/// Model an agent runs on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// AI vendor (openai | anthropic | google)
    pub provider: Provider,

    /// Vendor model name (e.g. "gpt-4o", "claude-sonnet-4")
    pub name: String,

    /// Pinned model version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Open-ended provider parameters, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
}

impl Model {
    /// Create a validated model with no version or parameters.
    pub fn new(provider: Provider, name: impl Into<String>) -> Result<Self, ValidationError> {
        let model = Self {
            provider,
            name: name.into(),
            version: None,
            parameters: None,
        };
        model.validate()?;
        Ok(model)
    }

    /// Pin a model version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Replace the parameter map.
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Insert a single parameter, creating the map on first use.
    pub fn with_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.parameters
            .get_or_insert_with(Parameters::new)
            .insert(key.into(), value.into());
        self
    }

    /// Check required fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("model.name", &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_new_minimal() {
        let model = Model::new(Provider::OpenAi, "gpt-4o").unwrap();
        assert_eq!(model.provider, Provider::OpenAi);
        assert_eq!(model.name, "gpt-4o");
        assert!(model.version.is_none());
        assert!(model.parameters.is_none());
    }

    #[test]
    fn test_model_empty_name_rejected() {
        let err = Model::new(Provider::Anthropic, "").unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "model.name" });
        assert!(Model::new(Provider::Anthropic, "  ").is_err());
    }

    #[test]
    fn test_model_minimal_omits_optional_keys() {
        let model = Model::new(Provider::Google, "gemini-2.5-pro").unwrap();
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value, json!({"provider": "google", "name": "gemini-2.5-pro"}));
    }

    #[test]
    fn test_model_parameters_keep_insertion_order() {
        let model = Model::new(Provider::Anthropic, "claude-sonnet-4")
            .unwrap()
            .with_parameter("temperature", 0.2)
            .with_parameter("max_tokens", 4096)
            .with_parameter("stop", json!(["\n\n"]));

        let serialized = serde_json::to_string(&model).unwrap();
        assert_eq!(
            serialized,
            r#"{"provider":"anthropic","name":"claude-sonnet-4","parameters":{"temperature":0.2,"max_tokens":4096,"stop":["\n\n"]}}"#
        );
    }

    #[test]
    fn test_model_roundtrip_complete() {
        let mut params = Parameters::new();
        params.insert("top_p".to_string(), json!(0.9));
        params.insert("tools".to_string(), json!({"web": true, "depth": [1, 2]}));
        let model = Model::new(Provider::OpenAi, "gpt-4o")
            .unwrap()
            .with_version("2024-08-06")
            .with_parameters(params);

        let serialized = serde_json::to_string(&model).unwrap();
        let reparsed: Model = serde_json::from_str(&serialized).unwrap();
        assert_eq!(reparsed, model);
    }

    #[test]
    fn test_model_deserialize_unknown_provider_fails() {
        let json = r#"{"provider": "mistral", "name": "large"}"#;
        let result: Result<Model, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_model_deserialize_missing_name_fails() {
        let json = r#"{"provider": "openai"}"#;
        let result: Result<Model, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_model_deserialized_empty_name_fails_validate() {
        let json = r#"{"provider": "openai", "name": ""}"#;
        let model: Model = serde_json::from_str(json).unwrap();
        assert!(model.validate().is_err());
    }
}
