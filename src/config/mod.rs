//! Config layer: well-known paths, JSON I/O, legacy migration and first-run bootstrap.
pub mod path;
pub mod io;
pub mod migrate;
pub mod bootstrap;

pub use path::ConfigPaths;
pub use io::{load_config, save_config};
pub use migrate::{rename_config_if_needed, MigrationOutcome};
pub use bootstrap::{create_config, load_or_create_config};
