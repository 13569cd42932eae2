//! Normalized answer values returned by the repertory.
//!
//! ```rust
//! use fprovider::{Answer, AnswerKind};
//!
//! let answer = Answer::text("Hello!");
//! assert_eq!(answer.kind, AnswerKind::Text);
//! assert_eq!(answer.kind.to_string(), "text");
//! ```

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerKind {
    Text,
}

impl AnswerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
        }
    }
}

impl Display for AnswerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub kind: AnswerKind,
}

impl Answer {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: AnswerKind::Text,
        }
    }
}
