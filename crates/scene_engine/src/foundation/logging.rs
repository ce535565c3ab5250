//! Logging utilities

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// `default_filter` applies when `RUST_LOG` is not set, e.g. `"info"` or
/// `"asteroid_dash=debug,scene_engine=info"`.
pub fn init(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    // A second init (tests, multiple binaries in one process) is harmless.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}
