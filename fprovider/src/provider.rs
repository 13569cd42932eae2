use fcommon::BoxFuture;

use crate::{DEFAULT_APOLOGY, ProviderError};

/// A pluggable source of answers.
///
/// `try_answer` is the outbound step and may fail. `answer` always resolves
/// to displayable text: a failed attempt is replaced by `apology()`.
pub trait KnowledgeProvider: Send + Sync {
    /// Stable label for logs and metrics, e.g. `"turing"`.
    fn kind(&self) -> &'static str;

    fn try_answer<'a>(&'a self, question: &'a str)
    -> BoxFuture<'a, Result<String, ProviderError>>;

    /// Text returned in place of a failed attempt.
    fn apology(&self) -> &str {
        DEFAULT_APOLOGY
    }

    fn answer<'a>(&'a self, question: &'a str) -> BoxFuture<'a, String> {
        Box::pin(async move {
            match self.try_answer(question).await {
                Ok(text) => text,
                Err(_) => self.apology().to_string(),
            }
        })
    }
}
