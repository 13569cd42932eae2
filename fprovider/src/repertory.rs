//! Name to provider lookup table and dispatch.
//!
//! The repertory is assembled once through [`RepertoryBuilder`] and is
//! read-only afterwards, so a single instance can serve concurrent requests
//! behind an `Arc` without locking.
//!
//! ```rust
//! use fprovider::Repertory;
//! use fprovider::adapters::canned::CannedProvider;
//!
//! let repertory = Repertory::builder()
//!     .with_provider("echo", CannedProvider::new("Hello!"))
//!     .build();
//!
//! assert!(repertory.contains("echo"));
//! assert!(!repertory.contains("Echo"));
//! assert_eq!(repertory.len(), 1);
//! ```

use std::sync::Arc;
use std::time::Instant;

use fcommon::Registry;

use crate::{Answer, FallbackText, KnowledgeHooks, KnowledgeProvider, NoopKnowledgeHooks};

pub struct Repertory {
    providers: Registry<String, Box<dyn KnowledgeProvider>>,
    fallback: FallbackText,
    hooks: Arc<dyn KnowledgeHooks>,
}

impl Repertory {
    pub fn builder() -> RepertoryBuilder {
        RepertoryBuilder::default()
    }

    /// Resolve `provider_name` and ask it `question`.
    ///
    /// Never fails: an unknown name yields the unknown-provider fallback
    /// without invoking any provider, and a failed provider call yields that
    /// provider's apology.
    pub async fn acquire(&self, provider_name: &str, question: &str) -> Answer {
        let Some(provider) = self.providers.get(provider_name) else {
            self.hooks.on_unknown_provider(provider_name);
            return Answer::text(self.fallback.unknown_provider.as_str());
        };

        let kind = provider.kind();
        let started = Instant::now();
        match provider.try_answer(question).await {
            Ok(text) => {
                self.hooks.on_answer(provider_name, kind, started.elapsed());
                Answer::text(text)
            }
            Err(error) => {
                self.hooks.on_provider_failure(provider_name, kind, &error);
                Answer::text(provider.apology())
            }
        }
    }

    pub fn contains(&self, provider_name: &str) -> bool {
        self.providers.contains_key(provider_name)
    }

    /// Registered provider names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names = self
            .providers
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    pub fn fallback(&self) -> &FallbackText {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for Repertory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repertory")
            .field("providers", &self.names())
            .field("fallback", &self.fallback)
            .finish()
    }
}

pub struct RepertoryBuilder {
    providers: Registry<String, Box<dyn KnowledgeProvider>>,
    fallback: FallbackText,
    hooks: Arc<dyn KnowledgeHooks>,
}

impl Default for RepertoryBuilder {
    fn default() -> Self {
        Self {
            providers: Registry::new(),
            fallback: FallbackText::default(),
            hooks: Arc::new(NoopKnowledgeHooks),
        }
    }
}

impl RepertoryBuilder {
    /// Register `provider` under `name`, replacing any earlier entry.
    pub fn with_provider<P>(mut self, name: impl Into<String>, provider: P) -> Self
    where
        P: KnowledgeProvider + 'static,
    {
        self.providers.insert(name.into(), Box::new(provider));
        self
    }

    pub fn with_boxed_provider(
        mut self,
        name: impl Into<String>,
        provider: Box<dyn KnowledgeProvider>,
    ) -> Self {
        self.providers.insert(name.into(), provider);
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackText) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn KnowledgeHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn build(self) -> Repertory {
        Repertory {
            providers: self.providers,
            fallback: self.fallback,
            hooks: self.hooks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
    use std::time::Duration;

    use fcommon::BoxFuture;

    use crate::{AnswerKind, DEFAULT_APOLOGY, ProviderError};

    #[derive(Debug, Default)]
    struct CountingProvider {
        reply: &'static str,
        calls: Arc<AtomicUsize>,
        questions: Arc<Mutex<Vec<String>>>,
    }

    impl CountingProvider {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                ..Self::default()
            }
        }
    }

    impl KnowledgeProvider for CountingProvider {
        fn kind(&self) -> &'static str {
            "counting"
        }

        fn try_answer<'a>(
            &'a self,
            question: &'a str,
        ) -> BoxFuture<'a, Result<String, ProviderError>> {
            Box::pin(async move {
                self.calls.fetch_add(1, Ordering::SeqCst);
                self.questions
                    .lock()
                    .expect("questions lock")
                    .push(question.to_string());
                Ok(self.reply.to_string())
            })
        }
    }

    struct FailingProvider;

    impl KnowledgeProvider for FailingProvider {
        fn kind(&self) -> &'static str {
            "failing"
        }

        fn try_answer<'a>(
            &'a self,
            _question: &'a str,
        ) -> BoxFuture<'a, Result<String, ProviderError>> {
            Box::pin(async { Err(ProviderError::unavailable("upstream returned 500")) })
        }

        fn apology(&self) -> &str {
            "provider broke"
        }
    }

    #[derive(Default)]
    struct RecordingHooks {
        events: Mutex<Vec<String>>,
    }

    impl KnowledgeHooks for RecordingHooks {
        fn on_answer(&self, provider: &str, kind: &str, _elapsed: Duration) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("answer:{provider}:{kind}"));
        }

        fn on_provider_failure(&self, provider: &str, kind: &str, error: &ProviderError) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("failure:{provider}:{kind}:{:?}", error.kind));
        }

        fn on_unknown_provider(&self, provider: &str) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("unknown:{provider}"));
        }
    }

    #[test]
    fn acquire_dispatches_to_registered_provider() {
        let turing = CountingProvider::new("Hello!");
        let turing_calls = Arc::clone(&turing.calls);
        let turing_questions = Arc::clone(&turing.questions);
        let other = CountingProvider::new("other");
        let other_calls = Arc::clone(&other.calls);

        let repertory = Repertory::builder()
            .with_provider("turing", turing)
            .with_provider("other", other)
            .build();

        let answer = block_on(repertory.acquire("turing", "hi"));

        assert_eq!(answer, Answer::text("Hello!"));
        assert_eq!(answer.kind, AnswerKind::Text);
        assert_eq!(turing_calls.load(Ordering::SeqCst), 1);
        assert_eq!(other_calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            *turing_questions.lock().expect("questions lock"),
            vec!["hi".to_string()]
        );
    }

    #[test]
    fn unknown_provider_returns_fallback_without_invoking_providers() {
        let turing = CountingProvider::new("Hello!");
        let calls = Arc::clone(&turing.calls);
        let repertory = Repertory::builder().with_provider("turing", turing).build();

        for question in ["hi", "", "what is the weather"] {
            let answer = block_on(repertory.acquire("unknown", question));
            assert_eq!(answer, Answer::text(DEFAULT_APOLOGY));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn lookup_is_case_sensitive_exact_match() {
        let turing = CountingProvider::new("Hello!");
        let calls = Arc::clone(&turing.calls);
        let repertory = Repertory::builder().with_provider("turing", turing).build();

        let answer = block_on(repertory.acquire("Turing", "hi"));
        assert_eq!(answer.text, DEFAULT_APOLOGY);
        let answer = block_on(repertory.acquire("turing ", "hi"));
        assert_eq!(answer.text, DEFAULT_APOLOGY);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unknown_provider_uses_its_own_fallback_text() {
        let fallback = FallbackText::default()
            .with_unknown_provider("no such provider...")
            .with_provider_failure("provider broke");
        let repertory = Repertory::builder().with_fallback(fallback).build();

        let answer = block_on(repertory.acquire("turing", "hi"));

        assert_eq!(answer.text, "no such provider...");
        assert_eq!(repertory.fallback().provider_failure, "provider broke");
    }

    #[test]
    fn hooks_observe_answers_failures_and_misses() {
        let hooks = Arc::new(RecordingHooks::default());
        let repertory = Repertory::builder()
            .with_provider("turing", CountingProvider::new("Hello!"))
            .with_provider("primary", FailingProvider)
            .with_hooks(hooks.clone())
            .build();

        block_on(repertory.acquire("turing", "hi"));
        block_on(repertory.acquire("missing", "hi"));

        let failed = block_on(repertory.acquire("primary", "hi"));
        assert_eq!(failed, Answer::text("provider broke"));

        let events = hooks.events.lock().expect("events lock").clone();
        assert_eq!(
            events,
            vec![
                "answer:turing:counting".to_string(),
                "unknown:missing".to_string(),
                "failure:primary:failing:Unavailable".to_string(),
            ]
        );
    }

    #[test]
    fn failed_provider_call_uses_provider_apology_not_unknown_fallback() {
        let fallback = FallbackText::default().with_unknown_provider("no such provider...");
        let repertory = Repertory::builder()
            .with_provider("primary", FailingProvider)
            .with_fallback(fallback)
            .build();

        assert_eq!(block_on(repertory.acquire("primary", "hi")).text, "provider broke");
        assert_eq!(block_on(FailingProvider.answer("hi")), "provider broke");
    }

    #[test]
    fn answer_text_is_preserved_exactly() {
        let reply = "  多行\n回答 with trailing space ";
        let repertory = Repertory::builder()
            .with_provider("turing", CountingProvider::new(reply))
            .build();

        let answer = block_on(repertory.acquire("turing", "hi"));
        assert_eq!(answer.text, reply);
    }

    #[test]
    fn names_are_sorted_and_read_only_queries_work() {
        let repertory = Repertory::builder()
            .with_provider("turing", CountingProvider::new("a"))
            .with_boxed_provider("echo", Box::new(CountingProvider::new("b")))
            .build();

        assert_eq!(repertory.names(), vec!["echo", "turing"]);
        assert_eq!(repertory.len(), 2);
        assert!(!repertory.is_empty());
        assert!(Repertory::builder().build().is_empty());
    }

    #[test]
    fn later_registration_replaces_earlier_one() {
        let repertory = Repertory::builder()
            .with_provider("turing", CountingProvider::new("first"))
            .with_provider("turing", CountingProvider::new("second"))
            .build();

        assert_eq!(repertory.len(), 1);
        assert_eq!(block_on(repertory.acquire("turing", "hi")).text, "second");
    }

    fn block_on<F: Future>(future: F) -> F::Output {
        let mut future = std::pin::pin!(future);
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);

        loop {
            match future.as_mut().poll(&mut cx) {
                Poll::Ready(value) => return value,
                Poll::Pending => std::thread::yield_now(),
            }
        }
    }

    fn noop_waker() -> Waker {
        unsafe fn clone(_: *const ()) -> RawWaker {
            RawWaker::new(std::ptr::null(), &VTABLE)
        }

        unsafe fn wake(_: *const ()) {}

        unsafe fn wake_by_ref(_: *const ()) {}

        unsafe fn drop(_: *const ()) {}

        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, wake, wake_by_ref, drop);

        let raw_waker = RawWaker::new(std::ptr::null(), &VTABLE);
        unsafe { Waker::from_raw(raw_waker) }
    }
}
