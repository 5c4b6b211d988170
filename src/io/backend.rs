use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::model::{ScheduledTask, Task};

/// Status value the backend uses to report a successful run.
pub const SUCCESS_STATUS: &str = "Success";

/// Message shown for any failure that is not reported by the backend itself.
pub const GENERIC_SUBMIT_ERROR: &str = "An error occurred while submitting tasks.";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("No backend endpoint configured")]
    NoEndpoint,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unreadable response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response has no status")]
    MissingStatus,

    #[error("submission ended without a response")]
    Aborted,

    /// The backend answered with a status other than [`SUCCESS_STATUS`].
    #[error("{0}")]
    Rejected(String),
}

impl SubmitError {
    /// Text shown in the error view. Backend statuses are shown verbatim,
    /// everything else collapses to a fixed message.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::NoEndpoint => self.to_string(),
            SubmitError::Rejected(status) => status.clone(),
            SubmitError::Transport(_)
            | SubmitError::Decode(_)
            | SubmitError::MissingStatus
            | SubmitError::Aborted => GENERIC_SUBMIT_ERROR.to_string(),
        }
    }
}

/// Body of a backend reply. `data` is decoded only once the status is known
/// to be a success.
#[derive(Debug, Deserialize)]
struct SubmitResponse {
    status: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

/// HTTP client for the scheduling backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    endpoint: Url,
}

impl BackendClient {
    pub fn new(endpoint: Url) -> Result<Self, SubmitError> {
        let http = Client::builder().build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST the task list as a JSON array and decode the reply.
    ///
    /// A single attempt; no timeout beyond the transport's own.
    pub async fn submit(&self, tasks: &[Task]) -> Result<Vec<ScheduledTask>, SubmitError> {
        tracing::info!(endpoint = %self.endpoint, tasks = tasks.len(), "submitting tasks");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(tasks)
            .send()
            .await?;
        let http_status = response.status();
        let body = response.bytes().await?;
        let reply: SubmitResponse = serde_json::from_slice(&body)?;

        // A blank status carries no message to show; treat it as absent.
        let status = reply
            .status
            .filter(|s| !s.trim().is_empty())
            .ok_or(SubmitError::MissingStatus)?;
        if http_status.is_success() && status == SUCCESS_STATUS {
            let data: Vec<ScheduledTask> = serde_json::from_value(reply.data)?;
            tracing::info!(returned = data.len(), "backend accepted tasks");
            Ok(data)
        } else {
            tracing::warn!(http_status = %http_status, %status, "backend rejected tasks");
            Err(SubmitError::Rejected(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_status_is_shown_verbatim() {
        let err = SubmitError::Rejected("Invalid deadline".to_string());
        assert_eq!(err.user_message(), "Invalid deadline");
    }

    #[test]
    fn internal_failures_use_generic_message() {
        let decode = serde_json::from_str::<SubmitResponse>("not json").unwrap_err();
        assert_eq!(SubmitError::Decode(decode).user_message(), GENERIC_SUBMIT_ERROR);
        assert_eq!(SubmitError::MissingStatus.user_message(), GENERIC_SUBMIT_ERROR);
        assert_eq!(SubmitError::Aborted.user_message(), GENERIC_SUBMIT_ERROR);
    }

    #[test]
    fn missing_endpoint_says_so() {
        assert_eq!(
            SubmitError::NoEndpoint.user_message(),
            "No backend endpoint configured"
        );
    }

    #[test]
    fn response_without_data_parses() {
        let reply: SubmitResponse =
            serde_json::from_str(r#"{"status":"Cycle detected"}"#).unwrap();
        assert_eq!(reply.status.as_deref(), Some("Cycle detected"));
        assert!(reply.data.is_null());
    }
}
