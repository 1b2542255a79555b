use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Locations of the toolchains the Android build needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// JDK home (the folder holding the `release` file)
    pub jdk_path: PathBuf,
    /// Android SDK root (the folder holding `tools/`)
    pub android_sdk_path: PathBuf,
}

impl Config {
    pub fn new(jdk_path: impl Into<PathBuf>, android_sdk_path: impl Into<PathBuf>) -> Self {
        Config { jdk_path: jdk_path.into(), android_sdk_path: android_sdk_path.into() }
    }
}
