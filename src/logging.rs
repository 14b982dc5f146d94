//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence; otherwise the verbosity count picks the level
//! for this crate. Output goes to stderr so it never mixes with game output.

use std::io;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter for a `-v` count
#[must_use]
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "numberle=warn",
        1 => "numberle=info",
        2 => "numberle=debug",
        _ => "numberle=trace",
    }
}

/// Initializes logging.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init(verbosity: u8) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directive(0), "numberle=warn");
        assert_eq!(default_directive(1), "numberle=info");
        assert_eq!(default_directive(2), "numberle=debug");
        assert_eq!(default_directive(9), "numberle=trace");
    }

    #[test]
    fn init_is_idempotent() {
        init(0);
        init(3);
    }
}
