use std::fs;
use crate::config::path::ConfigPaths;
use crate::error::{Error, Result};

/// What `rename_config_if_needed` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The canonical config file already exists.
    AlreadyCurrent,
    /// Nothing under the legacy name either.
    NoLegacy,
    /// The legacy folder only held the config, so the whole folder was renamed.
    FolderRenamed,
    /// The legacy folder holds other entries; only the config file was moved.
    FileMoved,
}

/// Move a legacy-named config to the canonical location, once.
///
/// Every directory entry counts, hidden files and subfolders included, so
/// the legacy folder is only renamed when the config is the sole entry.
/// The folder is never renamed onto an existing canonical folder.
pub fn rename_config_if_needed(paths: &ConfigPaths) -> Result<MigrationOutcome> {
    let config_file = paths.config_file();
    if config_file.exists() {
        return Ok(MigrationOutcome::AlreadyCurrent);
    }
    let legacy_file = paths.legacy_file();
    if !legacy_file.exists() {
        return Ok(MigrationOutcome::NoLegacy);
    }

    tracing::info!("An old named config file was found, changing it now");
    let legacy_folder = paths.legacy_folder();
    let entries = fs::read_dir(&legacy_folder)
        .map_err(|e| Error::io(&legacy_folder, e))?
        .count();
    let config_folder = paths.config_folder();

    if entries == 1 && !config_folder.exists() {
        fs::rename(&legacy_folder, &config_folder).map_err(|e| Error::io(&legacy_folder, e))?;
        let moved = paths.renamed_legacy_file();
        fs::rename(&moved, &config_file).map_err(|e| Error::io(&moved, e))?;
        tracing::debug!("renamed {} to {}", legacy_folder.display(), config_folder.display());
        return Ok(MigrationOutcome::FolderRenamed);
    }

    fs::create_dir_all(&config_folder).map_err(|e| Error::io(&config_folder, e))?;
    fs::rename(&legacy_file, &config_file).map_err(|e| Error::io(&legacy_file, e))?;
    tracing::debug!("moved {} to {}", legacy_file.display(), config_file.display());
    Ok(MigrationOutcome::FileMoved)
}
