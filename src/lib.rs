//! Library root for bubblewrap
pub mod error;
pub mod models;

pub mod config;
pub mod prompt;
pub mod jdk;
pub mod android;
pub mod psi;
pub mod commands;

// Convenience re-exports
pub use config::{load_or_create_config, ConfigPaths};
pub use error::{Error, Result, ValidationError};
pub use models::Config;
