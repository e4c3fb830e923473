//! `ai` command line parsing

use crate::constants::ai_commands;
use crate::{Error, Result};

/// A parsed `ai` subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiCommand {
    /// `ai suggest <question>`
    Suggest { question: String },
}

impl AiCommand {
    /// Parse the command line carried in an `aiRequest`.
    ///
    /// Words are re-joined with single spaces, so surrounding and repeated
    /// whitespace in the question is not significant.
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let subcommand = words.next().unwrap_or_default();
        let rest = words.collect::<Vec<_>>().join(" ");

        match subcommand {
            ai_commands::SUGGEST if rest.is_empty() => {
                Err(Error::Usage(ai_commands::SUGGEST_USAGE.to_string()))
            }
            ai_commands::SUGGEST => Ok(AiCommand::Suggest { question: rest }),
            other => Err(Error::UnknownSubcommand {
                found: other.to_string(),
                available: ai_commands::ALL.join(", "),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AiCommand::Suggest { .. } => ai_commands::SUGGEST,
        }
    }
}
