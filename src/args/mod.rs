//! Command-line argument parsing and handling.

pub mod definition;
pub mod utils;

pub use definition::{Args, apply_overrides};
pub use utils::determine_log_level;
