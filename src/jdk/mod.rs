//! JDK checks and the pinned JDK 8 installer.
pub mod install;
pub mod validate;

pub use install::{AdoptOpenJdkInstaller, JdkInstaller};
pub use validate::validate_jdk_path;
