//! Turing adapter configuration, form payload and reply parsing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ProviderError, SecretString};

pub const TURING_API_URL: &str = "http://www.tuling123.com/openapi/api";
pub const DEFAULT_USER_ID: &str = "12345";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuringConfig {
    pub api_url: String,
    pub api_key: SecretString,
    pub user_id: String,
    pub timeout: Duration,
}

impl TuringConfig {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: SecretString::new(api_key),
            user_id: DEFAULT_USER_ID.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.api_url.trim().is_empty() {
            return Err(ProviderError::invalid_config(
                "turing api_url must not be empty",
            ));
        }

        if self.api_key.is_blank() {
            return Err(ProviderError::authentication(
                "turing api key must not be empty",
            ));
        }

        if self.timeout.is_zero() {
            return Err(ProviderError::invalid_config(
                "turing timeout must be greater than zero",
            ));
        }

        Ok(())
    }
}

/// Form-encoded request body: `key=..&info=..&userid=..`.
///
/// Borrows the key from [`TuringConfig::api_key`] so no plain copy of the
/// secret outlives the request.
#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TuringForm<'a> {
    pub key: &'a str,
    pub info: &'a str,
    pub userid: &'a str,
}

impl std::fmt::Debug for TuringForm<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TuringForm")
            .field("key", &"[REDACTED]")
            .field("info", &self.info)
            .field("userid", &self.userid)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TuringReply {
    #[serde(default)]
    text: Option<String>,
}

/// Extract the `text` field from a reply body.
pub fn parse_reply(body: &str) -> Result<String, ProviderError> {
    let reply: TuringReply = serde_json::from_str(body)
        .map_err(|err| ProviderError::invalid_response(format!("malformed turing reply: {err}")))?;

    match reply.text {
        Some(text) if !text.is_empty() => Ok(text),
        Some(_) => Err(ProviderError::invalid_response(
            "turing reply text is empty",
        )),
        None => Err(ProviderError::invalid_response(
            "turing reply is missing the text field",
        )),
    }
}

pub(crate) fn truncate(input: &str, max: usize) -> String {
    if input.len() <= max {
        return input.to_string();
    }
    let mut end = max;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    let mut output = input[..end].to_string();
    output.push_str("...");
    output
}
