use std::sync::Arc;

use fcommon::BoxFuture;

use crate::{DEFAULT_APOLOGY, KnowledgeProvider, ProviderError};

use super::transport::{TuringHttpTransport, TuringTransport};
use super::types::{TuringConfig, TuringForm, parse_reply};

/// Adapter for the Turing robot question-answering API.
pub struct TuringProvider {
    config: TuringConfig,
    transport: Arc<dyn TuringTransport>,
    apology: String,
}

impl TuringProvider {
    pub fn new(config: TuringConfig, transport: Arc<dyn TuringTransport>) -> Self {
        Self {
            config,
            transport,
            apology: DEFAULT_APOLOGY.to_string(),
        }
    }

    /// Validate `config` and build a provider over a reqwest client bounded
    /// by `config.timeout`.
    pub fn from_config(config: TuringConfig) -> Result<Self, ProviderError> {
        config.validate()?;
        let transport = TuringHttpTransport::with_timeout(config.timeout)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    pub fn with_apology(mut self, apology: impl Into<String>) -> Self {
        self.apology = apology.into();
        self
    }

    pub fn config(&self) -> &TuringConfig {
        &self.config
    }

    /// The outbound step: one form POST, then reply parsing.
    pub async fn fetch(&self, question: &str) -> Result<String, ProviderError> {
        let form = TuringForm {
            key: self.config.api_key.expose(),
            info: question,
            userid: &self.config.user_id,
        };
        let body = self
            .transport
            .post_form(&self.config.api_url, form)
            .await?;
        parse_reply(&body)
    }
}

impl std::fmt::Debug for TuringProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TuringProvider")
            .field("config", &self.config)
            .field("transport", &self.transport)
            .field("apology", &self.apology)
            .finish()
    }
}

impl KnowledgeProvider for TuringProvider {
    fn kind(&self) -> &'static str {
        "turing"
    }

    fn try_answer<'a>(
        &'a self,
        question: &'a str,
    ) -> BoxFuture<'a, Result<String, ProviderError>> {
        Box::pin(self.fetch(question))
    }

    fn apology(&self) -> &str {
        &self.apology
    }
}
