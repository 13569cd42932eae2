//! Operational hook contracts for answers, provider failures and misses.
//!
//! `provider` is the name a provider is registered under; `kind` is its
//! [`KnowledgeProvider::kind`](crate::KnowledgeProvider::kind) label.

use std::time::Duration;

use crate::ProviderError;

pub trait KnowledgeHooks: Send + Sync {
    /// A provider produced a real answer.
    fn on_answer(&self, _provider: &str, _kind: &str, _elapsed: Duration) {}

    /// A provider's outbound step failed and its apology was returned.
    fn on_provider_failure(&self, _provider: &str, _kind: &str, _error: &ProviderError) {}

    fn on_unknown_provider(&self, _provider: &str) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopKnowledgeHooks;

impl KnowledgeHooks for NoopKnowledgeHooks {}
