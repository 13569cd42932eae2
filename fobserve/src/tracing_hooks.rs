//! Tracing-based observability hooks for knowledge dispatch.
//!
//! ```rust
//! use fobserve::TracingObservabilityHooks;
//! use fprovider::KnowledgeHooks;
//!
//! fn accepts_hooks(_hooks: &dyn KnowledgeHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use fprovider::{KnowledgeHooks, ProviderError};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl KnowledgeHooks for TracingObservabilityHooks {
    fn on_answer(&self, provider: &str, kind: &str, elapsed: Duration) {
        tracing::info!(
            phase = "repertory",
            event = "answer",
            provider,
            kind,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_provider_failure(&self, provider: &str, kind: &str, error: &ProviderError) {
        tracing::warn!(
            phase = "provider",
            event = "failure",
            provider,
            kind,
            error_kind = ?error.kind,
            error = %error
        );
    }

    fn on_unknown_provider(&self, provider: &str) {
        tracing::warn!(phase = "repertory", event = "unknown_provider", provider);
    }
}
