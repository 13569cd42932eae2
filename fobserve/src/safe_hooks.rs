use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use fprovider::{KnowledgeHooks, ProviderError};

/// Wraps hooks so a panicking hook never takes down a request.
pub struct SafeKnowledgeHooks<H> {
    inner: H,
}

impl<H> SafeKnowledgeHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> KnowledgeHooks for SafeKnowledgeHooks<H>
where
    H: KnowledgeHooks,
{
    fn on_answer(&self, provider: &str, kind: &str, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_answer(provider, kind, elapsed)
        }));
    }

    fn on_provider_failure(&self, provider: &str, kind: &str, error: &ProviderError) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_provider_failure(provider, kind, error)
        }));
    }

    fn on_unknown_provider(&self, provider: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_unknown_provider(provider)
        }));
    }
}
