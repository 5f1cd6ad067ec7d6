//! Tracing/logging initialization.
//!
//! Log output goes to stderr so it never mixes with command output or
//! exported reports on stdout.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "SPLITLEDGER_LOG";

/// Initialize tracing for the process.
///
/// `SPLITLEDGER_LOG` wins over `default_level`; an unparsable default falls
/// back to `warn`. Safe to call multiple times (later calls are no-ops).
pub fn init(default_level: &str, json: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init("debug", false);
        init("not a filter ===", true);
        tracing::debug!("still works");
    }
}
