use std::fs;
use std::path::Path;
use crate::android::validate_android_sdk_path;
use crate::config::io::{load_config, save_config};
use crate::config::migrate::rename_config_if_needed;
use crate::config::path::ConfigPaths;
use crate::error::{Error, Result};
use crate::jdk::{validate_jdk_path, JdkInstaller};
use crate::models::Config;
use crate::prompt::Prompt;

/// Ask the user for everything a config needs.
pub fn create_config(paths: &ConfigPaths, prompt: &mut dyn Prompt, installer: &dyn JdkInstaller) -> Result<Config> {
    let install_jdk = prompt.confirm(
        "Do you want Bubblewrap to install JDK? (Enter \"No\" to use your JDK installation)",
        true,
    )?;

    let jdk_path = if install_jdk {
        let jdk_folder = paths.jdk_folder();
        fs::create_dir_all(&jdk_folder).map_err(|e| Error::io(&jdk_folder, e))?;
        let installed = installer.install(&jdk_folder)?;
        validate_jdk_path(&installed.to_string_lossy())?
    } else {
        let answer = prompt.input("Path to your existing JDK:", None, validate_jdk_path)?;
        validate_jdk_path(&answer)?
    };

    let answer = prompt.input("Path to the Android SDK:", None, validate_android_sdk_path)?;
    let android_sdk_path = validate_android_sdk_path(&answer)?;

    Ok(Config { jdk_path, android_sdk_path })
}

/// Migrate, then load `path` (the canonical file by default), or prompt and save.
pub fn load_or_create_config(
    paths: &ConfigPaths,
    prompt: &mut dyn Prompt,
    installer: &dyn JdkInstaller,
    path: Option<&Path>,
) -> Result<Config> {
    rename_config_if_needed(paths)?;

    let default_path = paths.config_file();
    let path = path.unwrap_or(default_path.as_path());
    if let Some(existing) = load_config(path)? {
        return Ok(existing);
    }

    let cfg = create_config(paths, prompt, installer)?;
    save_config(path, &cfg)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::load_or_create_config;
    use crate::config::io::load_config;
    use crate::config::path::ConfigPaths;
    use crate::error::{Error, Result, ValidationError};
    use crate::jdk::JdkInstaller;
    use crate::models::Config;
    use crate::prompt::{PathValidator, Prompt};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Replays canned answers and records every question asked.
    #[derive(Default)]
    struct Scripted {
        confirms: VecDeque<bool>,
        inputs: VecDeque<String>,
        asked: Vec<String>,
    }

    impl Prompt for Scripted {
        fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
            self.asked.push(message.to_string());
            self.confirms.pop_front().ok_or_else(|| Error::Prompt("no answer".into()))
        }

        fn input(&mut self, message: &str, _default: Option<&str>, validator: PathValidator) -> Result<String> {
            self.asked.push(message.to_string());
            let answer = self.inputs.pop_front().ok_or_else(|| Error::Prompt("no answer".into()))?;
            validator(&answer)?;
            Ok(answer)
        }
    }

    /// How the unpacked archive looks on disk.
    #[derive(Default, Clone, Copy)]
    enum Layout {
        #[default]
        Flat,
        MacBundle,
        Empty,
    }

    /// Lays down a fake JDK 8 instead of downloading one.
    #[derive(Default)]
    struct FakeInstaller {
        layout: Layout,
        calls: Cell<usize>,
    }

    impl FakeInstaller {
        fn with_layout(layout: Layout) -> Self {
            FakeInstaller { layout, calls: Cell::new(0) }
        }
    }

    impl JdkInstaller for FakeInstaller {
        fn install(&self, target_dir: &Path) -> Result<PathBuf> {
            assert!(target_dir.is_dir(), "install target must exist before install");
            self.calls.set(self.calls.get() + 1);
            let root = target_dir.join("jdk8u232-b09");
            fs::create_dir(&root).unwrap();
            let home = match self.layout {
                Layout::Flat => root.clone(),
                Layout::MacBundle => {
                    fs::create_dir(root.join("Contents")).unwrap();
                    fs::create_dir(root.join("Contents/Home")).unwrap();
                    root.join("Contents/Home")
                }
                Layout::Empty => return Ok(root),
            };
            fs::write(home.join("release"), "JAVA_VERSION=\"1.8.0_232\"\n").unwrap();
            Ok(root)
        }
    }

    fn sdk(root: &Path) -> PathBuf {
        let sdk = root.join("Android/Sdk");
        fs::create_dir_all(sdk.join("tools")).unwrap();
        sdk
    }

    fn jdk(root: &Path) -> PathBuf {
        let jdk = root.join("jdk8");
        fs::create_dir_all(&jdk).unwrap();
        fs::write(jdk.join("release"), "JAVA_VERSION=\"1.8.0_252\"\n").unwrap();
        jdk
    }

    #[test]
    fn fresh_install_prompts_installs_and_persists() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_home(tmp.path());
        let sdk = sdk(tmp.path());
        let mut prompt = Scripted {
            confirms: VecDeque::from([true]),
            inputs: VecDeque::from([sdk.display().to_string()]),
            ..Default::default()
        };
        let installer = FakeInstaller::default();

        let cfg = load_or_create_config(&paths, &mut prompt, &installer, None).unwrap();

        assert_eq!(installer.calls.get(), 1);
        assert_eq!(cfg, Config::new(paths.jdk_folder().join("jdk8u232-b09"), sdk));
        assert_eq!(load_config(&paths.config_file()).unwrap(), Some(cfg));
    }

    #[test]
    fn existing_jdk_is_validated_and_used() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_home(tmp.path());
        let (jdk, sdk) = (jdk(tmp.path()), sdk(tmp.path()));
        let mut prompt = Scripted {
            confirms: VecDeque::from([false]),
            inputs: VecDeque::from([jdk.display().to_string(), sdk.display().to_string()]),
            ..Default::default()
        };
        let installer = FakeInstaller::default();

        let cfg = load_or_create_config(&paths, &mut prompt, &installer, None).unwrap();

        assert_eq!(installer.calls.get(), 0);
        assert_eq!(cfg, Config::new(jdk, sdk));
        assert_eq!(prompt.asked.len(), 3);
        assert!(!paths.jdk_folder().exists());
    }

    #[test]
    fn existing_config_skips_prompts() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_home(tmp.path());
        fs::create_dir_all(paths.config_folder()).unwrap();
        fs::write(paths.config_file(), r#"{"jdkPath":"/j","androidSdkPath":"/s"}"#).unwrap();
        let mut prompt = Scripted::default();

        let cfg = load_or_create_config(&paths, &mut prompt, &FakeInstaller::default(), None).unwrap();

        assert_eq!(cfg, Config::new("/j", "/s"));
        assert!(prompt.asked.is_empty());
    }

    #[test]
    fn legacy_config_is_migrated_then_loaded() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_home(tmp.path());
        let body = r#"{"jdkPath":"/old/jdk","androidSdkPath":"/old/sdk"}"#;
        fs::create_dir_all(paths.legacy_folder()).unwrap();
        fs::write(paths.legacy_file(), body).unwrap();
        let mut prompt = Scripted::default();

        let cfg = load_or_create_config(&paths, &mut prompt, &FakeInstaller::default(), None).unwrap();

        assert_eq!(cfg, Config::new("/old/jdk", "/old/sdk"));
        assert_eq!(fs::read_to_string(paths.config_file()).unwrap(), body);
        assert!(!paths.legacy_file().exists());
        assert!(prompt.asked.is_empty());
    }

    #[test]
    fn explicit_path_is_used_for_load_and_save() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_home(tmp.path());
        let custom = tmp.path().join("custom/bw.json");
        let sdk = sdk(tmp.path());
        let mut prompt = Scripted {
            confirms: VecDeque::from([true]),
            inputs: VecDeque::from([sdk.display().to_string()]),
            ..Default::default()
        };

        let cfg = load_or_create_config(&paths, &mut prompt, &FakeInstaller::default(), Some(custom.as_path())).unwrap();

        assert_eq!(load_config(&custom).unwrap(), Some(cfg));
        assert!(!paths.config_file().exists());
    }

    #[test]
    fn invalid_sdk_answer_propagates_and_nothing_is_saved() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_home(tmp.path());
        let mut prompt = Scripted {
            confirms: VecDeque::from([true]),
            inputs: VecDeque::from([tmp.path().display().to_string()]),
            ..Default::default()
        };

        let err = load_or_create_config(&paths, &mut prompt, &FakeInstaller::default(), None).unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert!(!paths.config_file().exists());
    }

    #[test]
    fn installed_mac_bundle_is_stored_as_its_home() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_home(tmp.path());
        let sdk = sdk(tmp.path());
        let mut prompt = Scripted {
            confirms: VecDeque::from([true]),
            inputs: VecDeque::from([sdk.display().to_string()]),
            ..Default::default()
        };
        let installer = FakeInstaller::with_layout(Layout::MacBundle);

        let cfg = load_or_create_config(&paths, &mut prompt, &installer, None).unwrap();

        let home = paths.jdk_folder().join("jdk8u232-b09/Contents/Home");
        assert_eq!(cfg.jdk_path, home);
        assert!(cfg.jdk_path.join("release").is_file());
        assert_eq!(load_config(&paths.config_file()).unwrap(), Some(cfg));
    }

    #[test]
    fn install_without_jdk_fails_and_nothing_is_saved() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_home(tmp.path());
        let sdk = sdk(tmp.path());
        let mut prompt = Scripted {
            confirms: VecDeque::from([true]),
            inputs: VecDeque::from([sdk.display().to_string()]),
            ..Default::default()
        };
        let installer = FakeInstaller::with_layout(Layout::Empty);

        let err = load_or_create_config(&paths, &mut prompt, &installer, None).unwrap_err();

        assert!(matches!(err, Error::Validation(ValidationError::NotAJdk(_))));
        assert_eq!(installer.calls.get(), 1);
        assert!(!paths.config_file().exists());
        assert_eq!(prompt.asked.len(), 1);
    }
}
