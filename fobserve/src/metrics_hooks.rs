//! Metrics-based observability hooks for knowledge dispatch.
//!
//! ```rust
//! use fobserve::MetricsObservabilityHooks;
//! use fprovider::KnowledgeHooks;
//!
//! fn accepts_hooks(_hooks: &dyn KnowledgeHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use fprovider::{KnowledgeHooks, ProviderError};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl KnowledgeHooks for MetricsObservabilityHooks {
    fn on_answer(&self, provider: &str, kind: &str, elapsed: Duration) {
        metrics::counter!(
            "frelay_knowledge_answer_total",
            "provider" => provider.to_string(),
            "kind" => kind.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "frelay_knowledge_answer_duration_seconds",
            "provider" => provider.to_string(),
            "kind" => kind.to_string()
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_provider_failure(&self, provider: &str, kind: &str, error: &ProviderError) {
        metrics::counter!(
            "frelay_knowledge_provider_failure_total",
            "provider" => provider.to_string(),
            "kind" => kind.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }

    fn on_unknown_provider(&self, provider: &str) {
        metrics::counter!(
            "frelay_knowledge_unknown_provider_total",
            "provider" => provider.to_string()
        )
        .increment(1);
    }
}
