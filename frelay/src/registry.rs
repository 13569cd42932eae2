//! Builds the repertory from configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use fprovider::adapters::canned::CannedProvider;
use fprovider::adapters::turing::TuringProvider;
use fprovider::{FallbackText, KnowledgeHooks, KnowledgeProvider, Repertory};

use crate::config::{ProviderConfig, RelayConfig};

/// Construct every configured provider and register it under its name.
///
/// Fails when a provider entry is invalid, e.g. a Turing entry without an
/// API key.
pub fn build_repertory(config: &RelayConfig, hooks: Arc<dyn KnowledgeHooks>) -> Result<Repertory> {
    let fallback = FallbackText::from(&config.fallback);
    let mut builder = Repertory::builder()
        .with_fallback(fallback.clone())
        .with_hooks(hooks);

    for (name, entry) in &config.providers {
        let provider: Box<dyn KnowledgeProvider> = match entry {
            ProviderConfig::Turing(turing) => {
                let provider = TuringProvider::from_config(turing.to_turing_config())
                    .with_context(|| format!("invalid turing provider '{name}'"))?
                    .with_apology(fallback.provider_failure.clone());
                Box::new(provider)
            }
            ProviderConfig::Canned(canned) => Box::new(CannedProvider::new(canned.reply.clone())),
        };
        tracing::info!("registered provider '{name}' ({})", provider.kind());
        builder = builder.with_boxed_provider(name.clone(), provider);
    }

    let repertory = builder.build();
    if !repertory.contains(&config.server.provider) {
        tracing::warn!(
            "provider '{}' is not configured; every request will get the fallback answer",
            config.server.provider
        );
    }

    Ok(repertory)
}
