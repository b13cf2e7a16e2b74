//! Google Translate HTTP client.
//!
//! # Responsibilities
//! - Call the public `translate_a/single` endpoint with a bounded timeout
//! - Reassemble the translated text from the segment array
//! - Map transport, status and shape problems to `TranslateError::Failed`

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::config::TranslationConfig;
use crate::translation::languages;
use crate::translation::provider::{TranslateError, TranslateResult, Translator};

const TRANSLATE_PATH: &str = "translate_a/single";

/// Translator backed by the Google Translate web endpoint.
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    url: Url,
    timeout_secs: u64,
}

impl GoogleTranslator {
    /// Build a client from configuration.
    pub fn new(config: &TranslationConfig) -> TranslateResult<Self> {
        let mut base = config.endpoint.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let url = Url::parse(&base)
            .and_then(|b| b.join(TRANSLATE_PATH))
            .map_err(|e| {
                TranslateError::Client(format!("invalid endpoint '{}': {}", config.endpoint, e))
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TranslateError::Client(e.to_string()))?;

        tracing::info!(url = %url, timeout_secs = config.timeout_secs, "Translation client initialized");

        Ok(Self {
            client,
            url,
            timeout_secs: config.timeout_secs,
        })
    }

    /// The full provider URL requests are sent to.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn is_supported_language(&self, code: &str) -> bool {
        languages::is_supported(code)
    }

    async fn translate(&self, text: &str, target: &str) -> TranslateResult<String> {
        let response = self
            .client
            .get(self.url.clone())
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranslateError::Failed(format!("request timed out after {} seconds", self.timeout_secs))
                } else {
                    TranslateError::Failed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Failed(format!("provider returned status {status}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslateError::Failed(format!("invalid provider response: {e}")))?;

        extract_translation(&body)
    }
}

/// Concatenate the translated part of each sentence segment.
///
/// The provider answers with `[[["<translated>", "<original>", ...], ...], ...]`.
pub fn extract_translation(body: &Value) -> TranslateResult<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::Failed("unexpected provider response shape".to_string()))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}
