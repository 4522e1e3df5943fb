//! Tracing subscriber setup for the CLI.
//!
//! Logs go to stderr so prompt output on stdout stays clean for piping.
//! `RUST_LOG` overrides the configured level when set.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Parse a level name. Unknown names fall back to `warn`.
pub fn parse_log_level(value: &str) -> LevelFilter {
    match value.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" | "warning" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => LevelFilter::WARN,
    }
}

/// The level to log at, given the configured level and the `-v` count.
pub fn effective_level(configured: &str, verbose: u8) -> LevelFilter {
    match verbose {
        0 => parse_log_level(configured),
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), LevelFilter::DEBUG);
        assert_eq!(parse_log_level(" INFO "), LevelFilter::INFO);
        assert_eq!(parse_log_level("warning"), LevelFilter::WARN);
        assert_eq!(parse_log_level("off"), LevelFilter::OFF);
        assert_eq!(parse_log_level("loud"), LevelFilter::WARN);
    }

    #[test]
    fn test_verbose_overrides_config() {
        assert_eq!(effective_level("error", 0), LevelFilter::ERROR);
        assert_eq!(effective_level("error", 1), LevelFilter::DEBUG);
        assert_eq!(effective_level("error", 3), LevelFilter::TRACE);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(LevelFilter::WARN);
        init_logging(LevelFilter::DEBUG);
    }
}
