use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use crate::error::{Error, Result};
use crate::models::Config;

/// Read a config file. A missing file is `Ok(None)`; anything unreadable is an error.
pub fn load_config(path: &Path) -> Result<Option<Config>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(path, e)),
    };
    let cfg = serde_json::from_str::<Config>(&content)
        .map_err(|source| Error::Json { path: path.to_path_buf(), source })?;
    Ok(Some(cfg))
}

/// Persist a config as pretty JSON, creating the parent folder if needed.
pub fn save_config(path: &Path, cfg: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let json = serde_json::to_string_pretty(cfg)
        .map_err(|source| Error::Json { path: path.to_path_buf(), source })?;

    // Write to a temp and then rename
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, format!("{json}\n")).map_err(|e| Error::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| Error::io(path, e))?;

    tracing::info!("saved config to {}", path.display());
    Ok(())
}
