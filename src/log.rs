//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so they never mix with the views' stdout output.
//!
//! Levels by verbosity:
//! - 0: WARN (default)
//! - 1 (`-v`): INFO, startup and termination
//! - 2 (`-vv`): DEBUG, every command and Model edit
//! - 3+ (`-vvv`): TRACE, every broadcast

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbosity: u8, ansi: bool) {
    let filter = EnvFilter::new(level_for(verbosity));

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0, false);
        init(2, false);
    }
}
