//! Language-model file checks
//!
//! The debug adapter only ships prompt templates for one model build,
//! so any other file is rejected before inference is attempted.

use std::path::{Path, PathBuf};

/// The only model file the debug adapter knows how to drive
pub const EXPECTED_MODEL_FILENAME: &str = "DeepSeek-R1-Distill-Llama-8B-Q8_0.gguf";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelPathError {
    #[error("Model path is empty")]
    Empty,

    #[error("Model file {0} does not exist")]
    NotFound(PathBuf),

    #[error("Unexpected model file: {found} (expected {})", EXPECTED_MODEL_FILENAME)]
    UnexpectedFile { found: String },
}

/// Check that `path` names an existing file of the expected model build.
pub fn validate_model_path(path: impl AsRef<Path>) -> Result<PathBuf, ModelPathError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(ModelPathError::Empty);
    }
    if !path.exists() {
        return Err(ModelPathError::NotFound(path.to_path_buf()));
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    if file_name != EXPECTED_MODEL_FILENAME {
        return Err(ModelPathError::UnexpectedFile { found: file_name });
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_empty_path_rejected() {
        assert_eq!(validate_model_path(""), Err(ModelPathError::Empty));
    }

    #[test]
    fn test_missing_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPECTED_MODEL_FILENAME);
        assert_eq!(
            validate_model_path(&path),
            Err(ModelPathError::NotFound(path.clone()))
        );
    }

    #[test]
    fn test_wrong_model_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("llama-3-8b.gguf");
        File::create(&path).unwrap();

        let err = validate_model_path(&path).unwrap_err();
        assert_eq!(
            err,
            ModelPathError::UnexpectedFile {
                found: "llama-3-8b.gguf".to_string()
            }
        );
        assert!(err.to_string().contains(EXPECTED_MODEL_FILENAME));
    }

    #[test]
    fn test_expected_model_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPECTED_MODEL_FILENAME);
        File::create(&path).unwrap();

        assert_eq!(validate_model_path(&path), Ok(path));
    }
}
