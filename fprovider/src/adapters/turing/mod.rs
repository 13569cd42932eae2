//! Turing robot adapter: form-encoded POST, JSON reply with a `text` field.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use fprovider::adapters::turing::{TuringConfig, TuringProvider};
//!
//! let config = TuringConfig::new("http://127.0.0.1:9/openapi/api", "demo-key")
//!     .with_timeout(Duration::from_secs(2));
//! let provider = TuringProvider::from_config(config).expect("config is valid");
//! assert_eq!(provider.config().user_id, "12345");
//! ```

mod provider;
mod transport;
mod types;

pub use provider::TuringProvider;
pub use transport::{TuringHttpTransport, TuringTransport};
pub use types::{
    DEFAULT_TIMEOUT, DEFAULT_USER_ID, TURING_API_URL, TuringConfig, TuringForm, parse_reply,
};
