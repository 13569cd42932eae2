//! Provider error kinds and error value helpers.
//!
//! These errors describe why an outbound call failed. They never cross the
//! [`KnowledgeProvider`](crate::KnowledgeProvider) boundary: providers turn
//! them into apology text before answering.
//!
//! ```rust
//! use fprovider::{ProviderError, ProviderErrorKind};
//!
//! let timeout = ProviderError::timeout("upstream took too long");
//! assert_eq!(timeout.kind, ProviderErrorKind::Timeout);
//! assert_eq!(timeout.to_string(), "Timeout: upstream took too long");
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    Authentication,
    InvalidConfig,
    Timeout,
    Transport,
    Unavailable,
    InvalidResponse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Authentication, message)
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::InvalidConfig, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Timeout, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Transport, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Unavailable, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::InvalidResponse, message)
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ProviderError {}
