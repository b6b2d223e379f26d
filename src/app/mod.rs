//! dexterm application module: terminal handling and the async runtime.

/// Runtime event loop and background workers.
pub mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoints so callers keep using `app::run(...)`.
pub use runtime::{http_catalog, run, run_with};
