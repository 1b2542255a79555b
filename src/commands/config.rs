use anyhow::Context;
use crate::config::{load_config, load_or_create_config, rename_config_if_needed, ConfigPaths};
use crate::jdk::AdoptOpenJdkInstaller;
use crate::models::Config;
use crate::prompt::InquirePrompt;

/// Load the config, running migration or first-run prompts as needed.
pub fn ensure(paths: &ConfigPaths) -> anyhow::Result<Config> {
    let mut prompt = InquirePrompt;
    let installer = AdoptOpenJdkInstaller::default();
    load_or_create_config(paths, &mut prompt, &installer, None)
        .with_context(|| format!("cannot set up config at {}", paths.config_file().display()))
}

pub fn print_config(cfg: &Config) {
    println!("JDK:         {}", cfg.jdk_path.display());
    println!("Android SDK: {}", cfg.android_sdk_path.display());
}

pub fn show(paths: &ConfigPaths) -> anyhow::Result<()> {
    rename_config_if_needed(paths)?;
    let path = paths.config_file();
    match load_config(&path)? {
        Some(cfg) => print_config(&cfg),
        None => println!("No config at {}. Run `bubblewrap config` to create one.", path.display()),
    }
    Ok(())
}
