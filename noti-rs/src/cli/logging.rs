//! Diagnostic logging to stderr.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const LEVELS: [LevelFilter; 5] = [
    LevelFilter::ERROR,
    LevelFilter::WARN,
    LevelFilter::INFO,
    LevelFilter::DEBUG,
    LevelFilter::TRACE,
];

/// Install the stderr subscriber.
///
/// `level` comes from the config; each `-v` raises it one step. `RUST_LOG`
/// directives take precedence.
pub fn init(level: &str, verbose: u8) {
    let base = parse_level(level).unwrap_or(LevelFilter::WARN);
    let filter = EnvFilter::builder()
        .with_default_directive(raise(base, verbose).into())
        .from_env_lossy();

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    // Ignore the error from a second initialization.
    let _ = tracing_subscriber::registry().with(layer).try_init();
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

fn raise(base: LevelFilter, steps: u8) -> LevelFilter {
    if steps == 0 {
        return base;
    }
    let start = LEVELS.iter().position(|l| *l == base).unwrap_or(0);
    let index = (start + steps as usize).min(LEVELS.len() - 1);
    LEVELS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("error"), Some(LevelFilter::ERROR));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::WARN));
        assert_eq!(parse_level("Info"), Some(LevelFilter::INFO));
        assert_eq!(parse_level("off"), Some(LevelFilter::OFF));
        assert_eq!(parse_level("loud"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn test_raise() {
        assert_eq!(raise(LevelFilter::WARN, 0), LevelFilter::WARN);
        assert_eq!(raise(LevelFilter::WARN, 1), LevelFilter::INFO);
        assert_eq!(raise(LevelFilter::WARN, 2), LevelFilter::DEBUG);
        assert_eq!(raise(LevelFilter::WARN, 9), LevelFilter::TRACE);
        assert_eq!(raise(LevelFilter::OFF, 1), LevelFilter::WARN);
    }
}
