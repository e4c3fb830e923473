//! DAP request and response envelopes
//!
//! See <https://microsoft.github.io/debug-adapter-protocol/specification>.
//! The host frames messages and handles every standard request; only the
//! envelopes around the custom request are modelled here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub seq: i64,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<serde_json::Value>,
}

impl Request {
    pub fn new(seq: i64, command: impl Into<String>) -> Self {
        Self {
            seq,
            command: command.into(),
            arguments: None,
        }
    }

    pub fn with_arguments(self, arguments: serde_json::Value) -> Self {
        Self {
            arguments: Some(arguments),
            ..self
        }
    }
}

/// Answer to a [`Request`]
///
/// `message` is set only when `success` is false; `body` only when true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub seq: i64,
    pub request_seq: i64,
    pub command: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl Response {
    /// Successful answer to `request` carrying `body`
    pub fn ok(seq: i64, request: &Request, body: serde_json::Value) -> Self {
        Self {
            seq,
            request_seq: request.seq,
            command: request.command.clone(),
            success: true,
            message: None,
            body: Some(body),
        }
    }

    /// Failed answer to `request`; `message` is what the user will see
    pub fn fail(seq: i64, request: &Request, message: impl Into<String>) -> Self {
        Self {
            seq,
            request_seq: request.seq,
            command: request.command.clone(),
            success: false,
            message: Some(message.into()),
            body: None,
        }
    }

    /// The body on success, the failure message otherwise
    pub fn into_result(self) -> Result<Option<serde_json::Value>, String> {
        if self.success {
            Ok(self.body)
        } else {
            Err(self.message.unwrap_or_default())
        }
    }
}
