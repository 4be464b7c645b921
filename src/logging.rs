use crate::error::HarDlError;
use anyhow::{Result, anyhow};
use tracing::level_filters::LevelFilter;

/// Parses a verbosity name such as `INFO` or `warning` (case-insensitive).
pub fn parse_level(name: &str) -> Result<LevelFilter, HarDlError> {
    let level = match name.trim().to_ascii_uppercase().as_str() {
        "NOTSET" | "TRACE" => LevelFilter::TRACE,
        "DEBUG" => LevelFilter::DEBUG,
        "INFO" => LevelFilter::INFO,
        "WARNING" | "WARN" => LevelFilter::WARN,
        "ERROR" | "CRITICAL" | "FATAL" => LevelFilter::ERROR,
        "OFF" => LevelFilter::OFF,
        _ => return Err(HarDlError::InvalidLogLevel(name.to_string())),
    };
    Ok(level)
}

/// Installs the stderr subscriber. Called once, from `main`.
pub fn init_logging(level: LevelFilter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_standard_names_in_any_case() {
        assert_eq!(parse_level("INFO").unwrap(), LevelFilter::INFO);
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level("Warning").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("warn").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("CRITICAL").unwrap(), LevelFilter::ERROR);
        assert_eq!(parse_level("notset").unwrap(), LevelFilter::TRACE);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = parse_level("bogus").unwrap_err();
        assert!(matches!(err, HarDlError::InvalidLogLevel(ref s) if s == "bogus"));
        assert!(parse_level("").is_err());
    }
}
