use std::time::Duration;

use fprovider::{KnowledgeHooks, ProviderError};

/// Forwards every callback to `first`, then `second`.
pub struct FanoutKnowledgeHooks<A, B> {
    first: A,
    second: B,
}

impl<A, B> FanoutKnowledgeHooks<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> KnowledgeHooks for FanoutKnowledgeHooks<A, B>
where
    A: KnowledgeHooks,
    B: KnowledgeHooks,
{
    fn on_answer(&self, provider: &str, kind: &str, elapsed: Duration) {
        self.first.on_answer(provider, kind, elapsed);
        self.second.on_answer(provider, kind, elapsed);
    }

    fn on_provider_failure(&self, provider: &str, kind: &str, error: &ProviderError) {
        self.first.on_provider_failure(provider, kind, error);
        self.second.on_provider_failure(provider, kind, error);
    }

    fn on_unknown_provider(&self, provider: &str) {
        self.first.on_unknown_provider(provider);
        self.second.on_unknown_provider(provider);
    }
}
