//! JSON response envelope returned by the HTTP boundary.
//!
//! ```rust
//! use frelay::envelope::{Envelope, TextContext};
//! use fprovider::Answer;
//!
//! let envelope = Envelope::ok(TextContext::from(Answer::text("Hello!")));
//! let json = serde_json::to_value(&envelope).expect("envelope serializes");
//!
//! assert_eq!(json["status"], true);
//! assert_eq!(json["code"], 200);
//! assert!(json["message"].is_null());
//! assert_eq!(json["dataType"], "TextContext");
//! assert_eq!(json["data"]["context"], "Hello!");
//! ```

use fprovider::{Answer, AnswerKind};
use serde::{Deserialize, Serialize};

pub const TEXT_CONTEXT: &str = "TextContext";

/// Payloads that can travel in an [`Envelope`].
pub trait EnvelopePayload {
    fn data_type(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub status: bool,
    pub code: u16,
    pub message: Option<String>,
    pub data: Option<T>,
    pub data_type: Option<String>,
}

impl<T> Envelope<T>
where
    T: EnvelopePayload,
{
    pub fn ok(data: T) -> Self {
        let data_type = data.data_type().to_string();
        Self {
            status: true,
            code: 200,
            message: None,
            data: Some(data),
            data_type: Some(data_type),
        }
    }
}

impl<T> Envelope<T> {
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            status: false,
            code,
            message: Some(message.into()),
            data: None,
            data_type: None,
        }
    }
}

/// Text answer payload: `{"dataType": "TextContext", "context": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContext {
    pub data_type: String,
    pub context: String,
}

impl EnvelopePayload for TextContext {
    fn data_type(&self) -> &str {
        &self.data_type
    }
}

impl From<Answer> for TextContext {
    fn from(answer: Answer) -> Self {
        let data_type = match answer.kind {
            AnswerKind::Text => TEXT_CONTEXT,
        };
        Self {
            data_type: data_type.to_string(),
            context: answer.text,
        }
    }
}
