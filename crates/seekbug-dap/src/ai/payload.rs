//! Wire shapes of the `aiRequest` exchange
//!
//! Request arguments: `{"command": "suggest <text>", "serviceConfigPath": "..."}`
//! Response: `{"body": {"output": "<text>"}}`

use crate::constants::ai_commands;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Arguments of an `aiRequest`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRequestArguments {
    /// `ai` command line without the leading `ai`, e.g. `suggest why is x null`
    pub command: String,

    /// Model path for the suggestion service, as configured.
    ///
    /// Omitted when the setting is absent; an empty string is sent as is
    /// and the adapter treats it like an absent path.
    #[serde(
        default,
        alias = "deepSeekLlmPath",
        skip_serializing_if = "Option::is_none"
    )]
    pub service_config_path: Option<String>,
}

impl AiRequestArguments {
    /// Arguments for `ai suggest <question>`
    pub fn suggest(question: &str, service_config_path: Option<String>) -> Self {
        Self {
            command: format!("{} {}", ai_commands::SUGGEST, question),
            service_config_path,
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }
}

/// Body of a successful `aiRequest` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiResponseBody {
    /// Text to show the user
    pub output: String,
}

/// The part of an `aiRequest` response the extension reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiResponse {
    pub body: AiResponseBody,
}

impl AiResponse {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            body: AiResponseBody {
                output: output.into(),
            },
        }
    }

    /// Decode a response message.
    ///
    /// Extra envelope fields (`seq`, `success`, ...) are ignored. A missing
    /// `body`, a missing `output`, or a non-string `output` is reported as
    /// [`Error::MalformedResponse`].
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        Self::deserialize(value).map_err(|e| Error::MalformedResponse(e.to_string()))
    }

    pub fn output(&self) -> &str {
        &self.body.output
    }
}
