//! Fake UI surface

use super::lock;
use async_trait::async_trait;
use seekbug_ports::{InputBoxOptions, UserInterface};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Answers prompts from a queue and records every message
///
/// An exhausted queue behaves like the user dismissing the prompt.
#[derive(Debug, Default)]
pub struct ScriptedUserInterface {
    answers: Mutex<VecDeque<Option<String>>>,
    prompts: Mutex<Vec<InputBoxOptions>>,
    info: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl ScriptedUserInterface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next prompt answer (`None` = dismissed)
    pub fn answer(&self, answer: Option<&str>) {
        lock(&self.answers).push_back(answer.map(str::to_string));
    }

    pub fn prompts(&self) -> Vec<InputBoxOptions> {
        lock(&self.prompts).clone()
    }

    pub fn info_messages(&self) -> Vec<String> {
        lock(&self.info).clone()
    }

    pub fn error_messages(&self) -> Vec<String> {
        lock(&self.errors).clone()
    }

    /// Whether any message of either kind was shown
    pub fn is_silent(&self) -> bool {
        lock(&self.info).is_empty() && lock(&self.errors).is_empty()
    }
}

#[async_trait]
impl UserInterface for ScriptedUserInterface {
    async fn show_input_box(&self, options: InputBoxOptions) -> Option<String> {
        lock(&self.prompts).push(options);
        lock(&self.answers).pop_front().flatten()
    }

    fn show_information_message(&self, message: &str) {
        lock(&self.info).push(message.to_string());
    }

    fn show_error_message(&self, message: &str) {
        lock(&self.errors).push(message.to_string());
    }
}
