//! Blocking client for the team/agent endpoints.
//!
//! Each call is one `POST` and one response, with no retries and no state
//! kept between calls beyond the pooled connections inside
//! [`reqwest::blocking::Client`].
//!
//! ```text
//! POST {base_url}/teams                    TeamConfig  -> CreateTeamResponse
//! POST {base_url}/teams/{team_id}/agents   AgentConfig -> AddAgentResponse
//! ```
//!
//! The blocking client runs its own runtime internally; do not construct or
//! drop a [`Big3Client`] from inside an async context.

use crate::config::ClientConfig;
use crate::error::Big3Error;
use big3_core::{
    AddAgentResponse, AgentConfig, CreateTeamResponse, TeamConfig, ValidationError,
};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// How a 404 from an endpoint should be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotFoundMeaning {
    /// The endpoint itself is missing; report as a plain API error.
    Endpoint,
    /// The parent resource in the path is missing.
    ParentResource,
}

/// Reusable handle to the orchestration API.
///
/// Cheap to clone; clones share one connection pool. Safe to use from
/// multiple threads at once.
#[derive(Debug, Clone)]
pub struct Big3Client {
    config: ClientConfig,
    http: reqwest::blocking::Client,
}

impl Big3Client {
    /// Build a client, checking `base_url` and timeouts up front.
    pub fn new(config: ClientConfig) -> Result<Self, Big3Error> {
        config.base()?;
        let timeout = config.request_timeout()?;
        let connect_timeout = config.connect_timeout()?;

        let mut builder =
            reqwest::blocking::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let http = builder.build().map_err(Big3Error::Build)?;

        Ok(Self { config, http })
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a team and return its server-assigned id.
    ///
    /// Not idempotent: retrying after an ambiguous failure (e.g. a timeout
    /// after the request was sent) may create a duplicate team.
    pub fn create_team(&self, team: &TeamConfig) -> Result<String, Big3Error> {
        self.create_team_response(team).map(|resp| resp.id)
    }

    /// Create a team and return the full response body.
    pub fn create_team_response(
        &self,
        team: &TeamConfig,
    ) -> Result<CreateTeamResponse, Big3Error> {
        team.validate()?;
        let url = self.config.endpoint(&["teams"])?;
        let resp: CreateTeamResponse = self.post(url, team, NotFoundMeaning::Endpoint)?;
        debug!(team_id = %resp.id, name = %resp.name, "team created");
        Ok(resp)
    }

    /// Register an agent in an existing team and return its id.
    ///
    /// Fails with [`Big3Error::NotFound`] when the server does not know
    /// `team_id`. Not idempotent, for the same reason as
    /// [`create_team`](Self::create_team).
    pub fn add_agent(&self, team_id: &str, agent: &AgentConfig) -> Result<String, Big3Error> {
        self.add_agent_response(team_id, agent).map(|resp| resp.id)
    }

    /// Register an agent and return the full response body.
    pub fn add_agent_response(
        &self,
        team_id: &str,
        agent: &AgentConfig,
    ) -> Result<AddAgentResponse, Big3Error> {
        if team_id.trim().is_empty() {
            return Err(ValidationError::EmptyTeamId.into());
        }
        agent.validate()?;
        let url = self.config.endpoint(&["teams", team_id, "agents"])?;
        let resp: AddAgentResponse = self.post(url, agent, NotFoundMeaning::ParentResource)?;
        debug!(team_id, agent_id = %resp.id, name = %agent.name, "agent added");
        Ok(resp)
    }

    /// Send one JSON `POST` and decode the success body.
    fn post<B, R>(&self, url: Url, body: &B, not_found: NotFoundMeaning) -> Result<R, Big3Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url_str = url.to_string();
        let token = self.config.bearer_token();
        debug!(method = "POST", url = %url_str, auth = token.is_some(), "sending request");

        let mut request = self.http.post(url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|source| Big3Error::Transport {
            url: url_str.clone(),
            source,
        })?;
        let status = response.status();
        let text = response.text().map_err(|source| Big3Error::Transport {
            url: url_str.clone(),
            source,
        })?;

        if !status.is_success() {
            warn!(url = %url_str, %status, body = %text, "API returned non-success status");
            return Err(classify_failure(status, text, not_found));
        }

        serde_json::from_str(&text).map_err(|e| {
            warn!(url = %url_str, error = %e, "response body did not match expected shape");
            Big3Error::Decode {
                body: text,
                reason: e.to_string(),
            }
        })
    }
}

fn classify_failure(status: StatusCode, body: String, not_found: NotFoundMeaning) -> Big3Error {
    let code = status.as_u16();
    if status == StatusCode::NOT_FOUND && not_found == NotFoundMeaning::ParentResource {
        Big3Error::NotFound { status: code, body }
    } else {
        Big3Error::Api { status: code, body }
    }
}

/// Create a team and return its id.
///
/// One-shot form of [`Big3Client::create_team`]: issues
/// `POST {base_url}/teams`, with `Authorization: Bearer {api_key}` when a
/// non-empty key is given. Retries are not safe; a retry may create a
/// duplicate team.
///
/// # Errors
///
/// - [`Big3Error::Validation`] for an invalid `config` or `base_url`
/// - [`Big3Error::Transport`] on connection failure or timeout
/// - [`Big3Error::Api`] on a non-success status
/// - [`Big3Error::Decode`] when the body is not a `CreateTeamResponse`
pub fn create_team(
    base_url: &str,
    config: &TeamConfig,
    api_key: Option<&str>,
) -> Result<String, Big3Error> {
    let client = Big3Client::new(ClientConfig::new(base_url).with_api_key(api_key))?;
    client.create_team(config)
}

/// Add an agent to an existing team and return the agent id.
///
/// One-shot form of [`Big3Client::add_agent`]: issues
/// `POST {base_url}/teams/{team_id}/agents`.
///
/// # Errors
///
/// As [`create_team`], plus [`Big3Error::NotFound`] when the server reports
/// that `team_id` does not exist, and [`ValidationError::EmptyTeamId`] for an
/// empty `team_id`.
pub fn add_agent(
    base_url: &str,
    team_id: &str,
    config: &AgentConfig,
    api_key: Option<&str>,
) -> Result<String, Big3Error> {
    let client = Big3Client::new(ClientConfig::new(base_url).with_api_key(api_key))?;
    client.add_agent(team_id, config)
}
