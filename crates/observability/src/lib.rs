//! Process-wide logging setup for the dashboard binaries and tests.

mod logging;

pub use logging::{filter_from_env, DEFAULT_DIRECTIVE};

/// Install the JSON subscriber.
///
/// Safe to call multiple times; only the first call installs anything.
pub fn init() {
    logging::init(filter_from_env(DEFAULT_DIRECTIVE));
}
