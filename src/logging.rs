//! Logging initialization utilities.

use env_logger::Env;

/// Initialize logging, honouring `RUST_LOG` and falling back to `warn`
/// (or `debug` when verbose output is requested).
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = Env::default().default_filter_or(default_level);
    // A second init (e.g. from tests) is not an error worth surfacing.
    let _ = env_logger::Builder::from_env(env).try_init();
}
