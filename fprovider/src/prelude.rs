//! Common `fprovider` imports for downstream crates.

pub use crate::{
    Answer, AnswerKind, DEFAULT_APOLOGY, FallbackText, KnowledgeHooks, KnowledgeProvider,
    NoopKnowledgeHooks, ProviderError, ProviderErrorKind, Repertory, RepertoryBuilder,
    SecretString,
};
pub use fcommon::BoxFuture;
