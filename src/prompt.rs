//! Interactive questions asked while building a fresh config.
use std::path::PathBuf;
use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, Text};
use crate::error::{Error, Result, ValidationError};

/// Checks a raw answer and returns the path it resolves to.
pub type PathValidator = fn(&str) -> std::result::Result<PathBuf, ValidationError>;

pub trait Prompt {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Ask for free text; only answers accepted by `validator` are returned.
    fn input(&mut self, message: &str, default: Option<&str>, validator: PathValidator) -> Result<String>;
}

/// Terminal prompts backed by `inquire`.
#[derive(Debug, Default)]
pub struct InquirePrompt;

impl Prompt for InquirePrompt {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Confirm::new(message)
            .with_default(default)
            .prompt()
            .map_err(|e| Error::Prompt(e.to_string()))
    }

    fn input(&mut self, message: &str, default: Option<&str>, validator: PathValidator) -> Result<String> {
        let mut text = Text::new(message).with_validator(move |s: &str| -> std::result::Result<Validation, CustomUserError> {
            Ok(match validator(s.trim()) {
                Ok(_) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        });
        if let Some(d) = default {
            text = text.with_default(d);
        }
        let answer = text.prompt().map_err(|e| Error::Prompt(e.to_string()))?;
        Ok(answer.trim().to_string())
    }
}

/// Expand `~` and environment variables in a user-entered path.
pub fn expand_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw.trim()) {
        Ok(s) => PathBuf::from(s.into_owned()),
        Err(_) => PathBuf::from(shellexpand::tilde(raw.trim()).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::expand_path;
    use std::path::PathBuf;

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(expand_path("  /opt/jdk "), PathBuf::from("/opt/jdk"));
    }

    #[test]
    fn tilde_is_expanded() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_path("~/Android/Sdk"), home.join("Android/Sdk"));
    }
}
