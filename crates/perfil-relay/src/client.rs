use std::time::Duration;

use tokio::task::JoinHandle;
use ureq::Agent;

use crate::error::RelayError;
use crate::submission::Submission;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Form-relay URL. `None` disables delivery.
    pub endpoint: Option<String>,
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Clone)]
pub struct Relay {
    endpoint: Option<String>,
    agent: Agent,
}

impl Relay {
    pub fn new(config: &RelayConfig) -> Self {
        let agent_config = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build();
        Self {
            endpoint: config.endpoint.clone(),
            agent: Agent::new_with_config(agent_config),
        }
    }

    pub fn disabled() -> Self {
        Self::new(&RelayConfig::default())
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    /// POST the submission and return the HTTP status. Blocks the calling
    /// thread; use [`Relay::dispatch`] from async code.
    ///
    /// A 4xx or 5xx answer from the relay comes back as
    /// [`RelayError::Transport`] carrying the status code, the same variant
    /// used for connection failures.
    pub fn send(&self, submission: &Submission) -> Result<u16, RelayError> {
        let endpoint = self.endpoint.as_deref().ok_or(RelayError::Disabled)?;
        let body = serde_json::to_string(submission)?;

        let response = self
            .agent
            .post(endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(body)?;

        Ok(response.status().as_u16())
    }

    /// Deliver on a detached blocking task.
    ///
    /// Returns `None` when the relay is disabled. The handle may be dropped;
    /// the outcome is logged either way. Must be called within a Tokio
    /// runtime.
    pub fn dispatch(&self, submission: Submission) -> Option<JoinHandle<Result<(), RelayError>>> {
        if !self.is_enabled() {
            tracing::debug!(variant = %submission.variant, "relay disabled, submission dropped");
            return None;
        }

        let relay = self.clone();
        Some(tokio::task::spawn_blocking(move || {
            match relay.send(&submission) {
                Ok(status) => {
                    tracing::info!(
                        status,
                        variant = %submission.variant,
                        score = submission.score,
                        "assessment result relayed"
                    );
                    Ok(())
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        variant = %submission.variant,
                        "assessment result relay failed"
                    );
                    Err(e)
                }
            }
        }))
    }
}
