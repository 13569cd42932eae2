//! Production-friendly observability hooks for knowledge dispatch.
//!
//! ```rust
//! use fobserve::{
//!     FanoutKnowledgeHooks, MetricsObservabilityHooks, SafeKnowledgeHooks,
//!     TracingObservabilityHooks,
//! };
//!
//! let _hooks = SafeKnowledgeHooks::new(FanoutKnowledgeHooks::new(
//!     TracingObservabilityHooks,
//!     MetricsObservabilityHooks,
//! ));
//! ```

mod fanout_hooks;
mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use fanout_hooks::FanoutKnowledgeHooks;
pub use metrics_hooks::MetricsObservabilityHooks;
pub use safe_hooks::SafeKnowledgeHooks;
pub use tracing_hooks::TracingObservabilityHooks;

pub mod prelude {
    pub use crate::{
        FanoutKnowledgeHooks, MetricsObservabilityHooks, SafeKnowledgeHooks,
        TracingObservabilityHooks,
    };
}
