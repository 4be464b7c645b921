use crate::cli::Args;
use crate::error::HarDlError;
use crate::logging;
use regex::Regex;
use reqwest::Proxy;
use std::path::PathBuf;
use std::time::Duration;
use tracing::level_filters::LevelFilter;

const DEFAULT_DIR_NAME: &str = "downloaded_img";

/// Validated settings for one run. Building it performs no I/O.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub archive: PathBuf,
    pub directory: PathBuf,
    pub pattern: Regex,
    pub concurrency: usize,
    pub timeout: Duration,
    pub proxy: Option<Proxy>,
    pub log_level: LevelFilter,
}

impl RunConfig {
    pub fn from_args(args: Args) -> Result<Self, HarDlError> {
        let log_level = logging::parse_level(&args.log)?;
        let pattern = compile_pattern(&args.regex)?;

        if args.threads == 0 {
            return Err(HarDlError::InvalidConcurrency(args.threads));
        }

        let proxy = args
            .proxy
            .map(|url| {
                Proxy::all(url.as_str()).map_err(|source| HarDlError::InvalidProxy { url, source })
            })
            .transpose()?;

        Ok(Self {
            archive: args.file,
            directory: args.directory.unwrap_or_else(default_directory),
            pattern,
            concurrency: args.threads,
            timeout: Duration::from_secs(args.timeout),
            proxy,
            log_level,
        })
    }
}

fn compile_pattern(raw: &str) -> Result<Regex, HarDlError> {
    let invalid = |reason: String| HarDlError::InvalidPattern {
        pattern: raw.to_string(),
        reason,
    };

    let pattern = Regex::new(raw).map_err(|e| invalid(e.to_string()))?;
    // captures_len counts the implicit whole-match group.
    if pattern.captures_len() != 2 {
        return Err(invalid(format!(
            "expected exactly one capture group, found {}",
            pattern.captures_len() - 1
        )));
    }
    Ok(pattern)
}

/// `downloaded_img` next to the executable.
fn default_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR_NAME))
}
