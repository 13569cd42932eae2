//! Provider that answers every question with one configured reply.

use fcommon::BoxFuture;

use crate::{KnowledgeProvider, ProviderError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedProvider {
    reply: String,
}

impl CannedProvider {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }

    pub fn reply(&self) -> &str {
        &self.reply
    }
}

impl KnowledgeProvider for CannedProvider {
    fn kind(&self) -> &'static str {
        "canned"
    }

    fn try_answer<'a>(
        &'a self,
        _question: &'a str,
    ) -> BoxFuture<'a, Result<String, ProviderError>> {
        Box::pin(async move { Ok(self.reply.clone()) })
    }
}
