//! Configuration types and loading for SeekBug
//!
//! This crate provides:
//! - Well-known identifiers (extension id, configuration keys, command ids)
//! - The typed view of the `seek-bug-dap` configuration section
//! - A TOML settings file with per-workspace overrides, for hosts that
//!   have no configuration system of their own
//! - Validation of the language-model file handed to the debug adapter
//!
//! # Usage
//!
//! ```rust,ignore
//! use seekbug_config::{load_settings, constants::keys};
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("seekbug.toml"))?;
//! let path = settings.get_string("seek-bug-dap", keys::EXECUTABLE_PATH, None);
//! ```

pub mod constants;

mod loader;
mod model;
mod settings;

pub use loader::{load_settings, load_settings_from_str, ConfigError, SettingsFile};
pub use model::{validate_model_path, ModelPathError, EXPECTED_MODEL_FILENAME};
pub use settings::ExtensionSettings;

pub use constants::{CONFIG_SECTION, DEBUGGER_TYPE, EXTENSION_ID};
