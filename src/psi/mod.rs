//! PageSpeed Insights response shapes, read from saved API output.
pub mod types;
pub mod summary;

pub use types::*;
pub use summary::print_summary;
