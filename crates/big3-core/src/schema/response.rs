//! Response bodies returned by the orchestration service

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of a successful `POST /teams`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTeamResponse {
    /// Server-assigned team ID
    #[serde(deserialize_with = "non_empty_id")]
    pub id: String,

    /// Team name as stored by the server
    pub name: String,

    /// Creation timestamp, as sent by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl CreateTeamResponse {
    /// Parse `created_at` as an RFC 3339 timestamp.
    ///
    /// Returns `None` when the field is absent or not RFC 3339.
    pub fn created_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        self.created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }
}

/// Body of a successful `POST /teams/{team_id}/agents`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAgentResponse {
    /// Server-assigned agent ID
    #[serde(deserialize_with = "non_empty_id")]
    pub id: String,
}

// An empty id is as much a contract violation as a missing one.
fn non_empty_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let id = String::deserialize(deserializer)?;
    if id.trim().is_empty() {
        return Err(serde::de::Error::custom("id must not be empty"));
    }
    Ok(id)
}
