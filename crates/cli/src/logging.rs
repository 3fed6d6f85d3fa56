// crates/cli/src/logging.rs
use env_logger::Env;

/// Default filter for a `-v` count. Per-source failures log at `warn`, so
/// they only show from `-v` on; the report itself already names them.
#[must_use]
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr logger. `RUST_LOG` overrides the `-v` level.
pub fn init(verbosity: u8) {
    let env = Env::default().default_filter_or(level_for(verbosity));
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
