//! Knowledge providers and the repertory that dispatches to them by name.
//!
//! ```rust
//! use fprovider::{Answer, Repertory};
//! use fprovider::adapters::canned::CannedProvider;
//!
//! let repertory = Repertory::builder()
//!     .with_provider("turing", CannedProvider::new("Hello!"))
//!     .build();
//!
//! let runtime = tokio::runtime::Builder::new_current_thread().build()
//!     .expect("runtime should build");
//! let answer = runtime.block_on(repertory.acquire("turing", "hi"));
//! assert_eq!(answer, Answer::text("Hello!"));
//!
//! let fallback = runtime.block_on(repertory.acquire("unknown", "hi"));
//! assert_eq!(fallback, Answer::text("Sorry, I could not understand that"));
//! ```

pub mod adapters;
pub mod answer;
pub mod credentials;
pub mod error;
pub mod fallback;
pub mod hooks;
pub mod prelude;
pub mod provider;
pub mod repertory;

pub use answer::{Answer, AnswerKind};
pub use credentials::SecretString;
pub use error::{ProviderError, ProviderErrorKind};
pub use fallback::{DEFAULT_APOLOGY, FallbackText};
pub use hooks::{KnowledgeHooks, NoopKnowledgeHooks};
pub use provider::KnowledgeProvider;
pub use repertory::{Repertory, RepertoryBuilder};
