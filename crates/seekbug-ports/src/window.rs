//! User-facing UI port

use async_trait::async_trait;

/// Options for a free-text prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBoxOptions {
    /// Text shown above the input field
    pub prompt: String,
}

impl InputBoxOptions {
    pub fn prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Messages and prompts shown by the host
#[async_trait]
pub trait UserInterface: Send + Sync {
    /// Ask for a line of text. `None` means the user dismissed the prompt.
    async fn show_input_box(&self, options: InputBoxOptions) -> Option<String>;

    fn show_information_message(&self, message: &str);

    fn show_error_message(&self, message: &str);
}
