//! Formspree delivery backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{RelayError, Result};
use crate::traits::FormRelay;
use crate::types::FormSubmission;

/// Connect timeout (seconds).
const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Request timeout (seconds).
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Posts submissions as JSON to a Formspree-compatible form endpoint.
#[derive(Debug)]
pub struct FormspreeRelay {
    client: Client,
    endpoint: String,
}

impl FormspreeRelay {
    /// Build a relay for `endpoint`.
    ///
    /// The endpoint must be an absolute http(s) URL such as
    /// `https://formspree.io/f/abcd1234`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(RelayError::InvalidEndpoint {
                endpoint,
                detail: "endpoint is empty".to_string(),
            });
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(RelayError::InvalidEndpoint {
                endpoint,
                detail: "endpoint must be an absolute http(s) URL".to_string(),
            });
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| RelayError::Network {
                detail: e.to_string(),
            })?;

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_send_error(&self, e: &reqwest::Error) -> RelayError {
        if e.is_timeout() {
            RelayError::Timeout {
                endpoint: self.endpoint.clone(),
            }
        } else {
            RelayError::Network {
                detail: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl FormRelay for FormspreeRelay {
    fn id(&self) -> &'static str {
        "formspree"
    }

    async fn submit(&self, submission: &FormSubmission) -> Result<()> {
        log::debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
