use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while locating, migrating, creating or reading config.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error on {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The user cancelled or the terminal could not be driven.
    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("JDK install failed: {0}")]
    Install(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

/// Rejection reasons for user-supplied JDK / Android SDK locations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} does not exist")]
    NotFound(PathBuf),

    #[error("{0} is not a JDK: missing `release` file")]
    NotAJdk(PathBuf),

    #[error("JDK at {path} is version {found}, JDK 1.8 is required")]
    UnsupportedJdk { path: PathBuf, found: String },

    #[error("{0} is not an Android SDK: missing `tools` directory")]
    NotAnAndroidSdk(PathBuf),
}
