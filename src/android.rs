use std::path::PathBuf;
use crate::error::ValidationError;
use crate::prompt::expand_path;

/// An Android SDK root must hold a `tools` directory.
pub fn validate_android_sdk_path(raw: &str) -> Result<PathBuf, ValidationError> {
    let path = expand_path(raw);
    if !path.is_dir() {
        return Err(ValidationError::NotFound(path));
    }
    if !path.join("tools").is_dir() {
        return Err(ValidationError::NotAnAndroidSdk(path));
    }
    Ok(path)
}
