//! Single-endpoint HTTP relay in front of the knowledge repertory.
//!
//! `GET /api/say/{context}` asks the configured provider and wraps the
//! answer in an [`envelope::Envelope`]. The response is always HTTP 200;
//! unknown providers and provider failures produce apology text.

pub mod config;
pub mod envelope;
pub mod registry;
pub mod router;
pub mod serve;
pub mod utils;

pub use config::RelayConfig;
pub use registry::build_repertory;
pub use router::{AppState, router};
pub use serve::{ServeHandle, default_hooks, serve, serve_repertory};
