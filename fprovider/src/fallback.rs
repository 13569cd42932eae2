//! Apology texts used when no real answer can be produced.
//!
//! The unknown-provider and provider-failure paths are configured
//! separately so they can diverge.
//!
//! ```rust
//! use fprovider::{DEFAULT_APOLOGY, FallbackText};
//!
//! let fallback = FallbackText::default().with_unknown_provider("No such provider");
//! assert_eq!(fallback.unknown_provider, "No such provider");
//! assert_eq!(fallback.provider_failure, DEFAULT_APOLOGY);
//! ```

pub const DEFAULT_APOLOGY: &str = "Sorry, I could not understand that";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackText {
    pub unknown_provider: String,
    pub provider_failure: String,
}

impl Default for FallbackText {
    fn default() -> Self {
        Self {
            unknown_provider: DEFAULT_APOLOGY.to_string(),
            provider_failure: DEFAULT_APOLOGY.to_string(),
        }
    }
}

impl FallbackText {
    pub fn with_unknown_provider(mut self, text: impl Into<String>) -> Self {
        self.unknown_provider = text.into();
        self
    }

    pub fn with_provider_failure(mut self, text: impl Into<String>) -> Self {
        self.provider_failure = text.into();
        self
    }
}
