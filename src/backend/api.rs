//! HTTP client for the suggestion backend

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;
use std::time::Duration;

use super::types::Suggestion;
use crate::error::LookupError;

/// Characters left alone by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// `base` with a `q` parameter appended.
pub fn query_url(base: &str, term: &str) -> String {
    let joiner = if base.contains('?') { '&' } else { '?' };
    format!("{}{}q={}", base, joiner, encode_component(term))
}

/// Client for the autocomplete endpoint
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    suggestions_url: String,
}

impl BackendClient {
    /// `timeout` of `None` waits as long as the backend takes.
    pub fn new(suggestions_url: &str, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });

        Self {
            client,
            suggestions_url: suggestions_url.to_string(),
        }
    }

    /// Fetch suggestions for `term`. No length check happens here.
    pub async fn suggestions(&self, term: &str) -> Result<Vec<Suggestion>, LookupError> {
        let url = query_url(&self.suggestions_url, term);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        response
            .json()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))
    }
}
