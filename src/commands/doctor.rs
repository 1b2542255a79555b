use std::path::Path;
use crate::android::validate_android_sdk_path;
use crate::config::{load_config, rename_config_if_needed, ConfigPaths};
use crate::jdk::validate_jdk_path;
use crate::prompt::PathValidator;

/// Re-run the path checks against the stored config. Returns whether everything passed.
pub fn doctor(paths: &ConfigPaths) -> anyhow::Result<bool> {
    rename_config_if_needed(paths)?;
    let path = paths.config_file();
    let Some(cfg) = load_config(&path)? else {
        println!("No config at {}. Run `bubblewrap config` to create one.", path.display());
        return Ok(false);
    };

    let jdk_ok = report("JDK", &cfg.jdk_path, validate_jdk_path);
    let sdk_ok = report("Android SDK", &cfg.android_sdk_path, validate_android_sdk_path);
    Ok(jdk_ok && sdk_ok)
}

fn report(label: &str, path: &Path, check: PathValidator) -> bool {
    match check(&path.to_string_lossy()) {
        Ok(_) => {
            println!("[ok]   {label}: {}", path.display());
            true
        }
        Err(e) => {
            println!("[fail] {label}: {e}");
            false
        }
    }
}
