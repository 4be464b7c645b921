use crate::config::RunConfig;
use crate::downloader::Downloader;
use crate::error::HarDlError;
use crate::filenames;
use crate::har;
use crate::models::{FetchJob, FetchSummary};

/// Reads the HAR file, prepares the output directory and downloads every image.
///
/// Only configuration, HAR and directory problems are errors; individual
/// download failures are reported in the returned summary.
pub async fn run(config: &RunConfig) -> Result<FetchSummary, HarDlError> {
    let urls = har::read_image_urls(&config.archive)?;
    tracing::info!(
        "Loaded {} image URLs from {}",
        urls.len(),
        config.archive.display()
    );

    let downloader = Downloader::new(config.concurrency, config.timeout, config.proxy.clone())?;

    let destinations = filenames::resolve_destinations(&config.pattern, &config.directory, &urls)?;
    let jobs = FetchJob::pair(urls, destinations);

    let outcomes = downloader.download_all(jobs).await;
    let summary = FetchSummary::from_outcomes(&outcomes);

    tracing::info!("Download already finished!");
    tracing::info!("You can check the {} directory", config.directory.display());

    Ok(summary)
}
