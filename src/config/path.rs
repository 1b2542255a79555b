use std::path::PathBuf;

const CONFIG_FOLDER: &str = ".bubblewrap";
const CONFIG_NAME: &str = "config.json";
const LEGACY_CONFIG_FOLDER: &str = ".llama-pack";
const LEGACY_CONFIG_NAME: &str = "llama-pack-config.json";
const JDK_FOLDER: &str = "jdk";

/// Every well-known location, resolved from a single home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    home: PathBuf,
}

impl ConfigPaths {
    pub fn from_home() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        tracing::debug!("resolving config paths under {}", home.display());
        ConfigPaths { home }
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        ConfigPaths { home: home.into() }
    }

    pub fn config_folder(&self) -> PathBuf {
        self.home.join(CONFIG_FOLDER)
    }

    /// `~/.bubblewrap/config.json`
    pub fn config_file(&self) -> PathBuf {
        self.config_folder().join(CONFIG_NAME)
    }

    pub fn legacy_folder(&self) -> PathBuf {
        self.home.join(LEGACY_CONFIG_FOLDER)
    }

    /// `~/.llama-pack/llama-pack-config.json`
    pub fn legacy_file(&self) -> PathBuf {
        self.legacy_folder().join(LEGACY_CONFIG_NAME)
    }

    /// Config file name inside the canonical folder right after a folder rename.
    pub(crate) fn renamed_legacy_file(&self) -> PathBuf {
        self.config_folder().join(LEGACY_CONFIG_NAME)
    }

    pub fn jdk_folder(&self) -> PathBuf {
        self.config_folder().join(JDK_FOLDER)
    }
}
