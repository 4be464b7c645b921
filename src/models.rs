use crate::error::FetchError;
use std::path::PathBuf;

/// One image to fetch: the URL from the HAR file and where to store it.
#[derive(Debug, Clone)]
pub struct FetchJob {
    pub url: String,
    pub destination: PathBuf,
}

impl FetchJob {
    /// Pairs URLs and destinations index by index.
    pub fn pair(urls: Vec<String>, destinations: Vec<PathBuf>) -> Vec<FetchJob> {
        debug_assert_eq!(urls.len(), destinations.len());
        urls.into_iter()
            .zip(destinations)
            .map(|(url, destination)| FetchJob { url, destination })
            .collect()
    }
}

#[derive(Debug)]
pub enum FetchStatus {
    Downloaded,
    Failed(FetchError),
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub destination: PathBuf,
    pub status: FetchStatus,
}

impl FetchOutcome {
    pub fn is_downloaded(&self) -> bool {
        matches!(self.status, FetchStatus::Downloaded)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub downloaded: usize,
    pub failed: usize,
}

impl FetchSummary {
    pub fn from_outcomes(outcomes: &[FetchOutcome]) -> Self {
        let downloaded = outcomes.iter().filter(|o| o.is_downloaded()).count();
        Self {
            downloaded,
            failed: outcomes.len() - downloaded,
        }
    }
}
