//! AI vendor registry for model configuration.
//!
//! [`Provider`] is a closed enum of the vendors the orchestration service
//! accepts.  All variants serialise/deserialise via their lower-case wire
//! identifier, so an unrecognised vendor fails at parse time rather than on
//! the server.
//!
//! # Examples
//!
//! ```rust
//! use big3_core::Provider;
//! use std::str::FromStr;
//!
//! let p = Provider::from_str("anthropic").unwrap();
//! assert_eq!(p, Provider::Anthropic);
//! assert_eq!(p.to_string(), "anthropic");
//!
//! assert!(Provider::from_str("mistral").is_err());
//! ```

use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A supported AI model vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// `openai`
    OpenAi,
    /// `anthropic`
    Anthropic,
    /// `google`
    Google,
}

impl Provider {
    /// Every supported vendor, in wire-identifier order.
    pub const ALL: [Provider; 3] = [Provider::OpenAi, Provider::Anthropic, Provider::Google];

    /// Wire identifier for this vendor.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Google => "google",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(Provider::OpenAi),
            "anthropic" => Ok(Provider::Anthropic),
            "google" => Ok(Provider::Google),
            other => Err(ValidationError::UnknownProvider {
                value: other.to_string(),
            }),
        }
    }
}

impl Serialize for Provider {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Provider {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Provider::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_variants_display_and_parse() {
        let cases = [
            (Provider::OpenAi, "openai"),
            (Provider::Anthropic, "anthropic"),
            (Provider::Google, "google"),
        ];

        for (variant, s) in &cases {
            assert_eq!(variant.to_string(), *s, "Display mismatch for {variant:?}");
            assert_eq!(
                Provider::from_str(s).unwrap(),
                *variant,
                "FromStr mismatch for '{s}'"
            );
        }
        assert_eq!(Provider::ALL.len(), cases.len());
    }

    #[test]
    fn unknown_vendor_rejected() {
        let err = Provider::from_str("mistral").unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownProvider {
                value: "mistral".to_string()
            }
        );
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!(Provider::from_str("OpenAI").is_err());
        assert!(Provider::from_str("").is_err());
    }

    #[test]
    fn serde_uses_wire_identifier() {
        let json = serde_json::to_string(&Provider::Google).unwrap();
        assert_eq!(json, r#""google""#);
        let parsed: Provider = serde_json::from_str(r#""openai""#).unwrap();
        assert_eq!(parsed, Provider::OpenAi);
    }

    #[test]
    fn serde_rejects_unknown_vendor() {
        let result: Result<Provider, _> = serde_json::from_str(r#""cohere""#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Unknown provider"), "error was: {err}");
    }
}
