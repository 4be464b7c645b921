use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the whole run.
#[derive(Error, Debug)]
pub enum HarDlError {
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid filename regex {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid number of threads: {0} (must be at least 1)")]
    InvalidConcurrency(usize),

    #[error("Failed to read HAR file {path}: {reason}")]
    MalformedArchive { path: PathBuf, reason: String },

    #[error("Output directory already exists: {path}")]
    DirectoryExists { path: PathBuf },

    #[error("Failed to create output directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid proxy {url:?}: {source}")]
    InvalidProxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl HarDlError {
    /// Remediation text shown to the operator next to the error.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            HarDlError::MalformedArchive { .. } => Some(
                "Is your har.json file already filled with the data you want to download?",
            ),
            HarDlError::DirectoryExists { .. } => Some(
                "Folder already exists, you may want to remove the content of the folder \
                 or choose a different directory before continuing",
            ),
            HarDlError::DirectoryCreation { .. } => {
                Some("Check that the output location is writable or choose a different directory")
            }
            _ => None,
        }
    }
}

/// Why a single image was not downloaded.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("could not write file: {0}")]
    Write(#[from] std::io::Error),

    #[error("download task aborted: {0}")]
    Task(String),
}

impl FetchError {
    /// True for failures on the remote side rather than the local filesystem.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Request(_) | FetchError::Status(_))
    }
}
