use std::fs;
use std::path::{Path, PathBuf};
use regex::Regex;
use crate::error::ValidationError;
use crate::prompt::expand_path;

const SUPPORTED_JDK_PREFIX: &str = "1.8";

/// Accept a JDK 8 home. macOS bundles are accepted at their root too.
pub fn validate_jdk_path(raw: &str) -> Result<PathBuf, ValidationError> {
    let path = expand_path(raw);
    if !path.exists() {
        return Err(ValidationError::NotFound(path));
    }
    let home = jdk_home(&path).ok_or_else(|| ValidationError::NotAJdk(path.clone()))?;
    let release = fs::read_to_string(home.join("release"))
        .map_err(|_| ValidationError::NotAJdk(path.clone()))?;
    let version = java_version(&release).ok_or_else(|| ValidationError::NotAJdk(path.clone()))?;
    if !version.starts_with(SUPPORTED_JDK_PREFIX) {
        return Err(ValidationError::UnsupportedJdk { path, found: version });
    }
    Ok(home)
}

fn jdk_home(path: &Path) -> Option<PathBuf> {
    if path.join("release").is_file() {
        return Some(path.to_path_buf());
    }
    let mac = path.join("Contents").join("Home");
    if mac.join("release").is_file() { Some(mac) } else { None }
}

/// `JAVA_VERSION="1.8.0_232"` -> `1.8.0_232`
pub fn java_version(release: &str) -> Option<String> {
    let re = Regex::new(r#"(?m)^JAVA_VERSION="?([^"\r\n]+)"?"#).ok()?;
    re.captures(release).map(|c| c[1].trim().to_string())
}
