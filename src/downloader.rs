use crate::error::{FetchError, HarDlError};
use crate::models::{FetchJob, FetchOutcome, FetchStatus, FetchSummary};
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, Proxy};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Semaphore;
use tokio::task;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads a batch of images with at most `concurrency` requests in flight.
#[derive(Clone)]
pub struct Downloader {
    client: Client,
    concurrency: usize,
}

impl Downloader {
    pub fn new(
        concurrency: usize,
        timeout: Duration,
        proxy: Option<Proxy>,
    ) -> Result<Self, HarDlError> {
        let mut client_builder = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout);

        if let Some(proxy) = proxy {
            client_builder = client_builder.proxy(proxy);
        }

        Ok(Self {
            client: client_builder.build()?,
            concurrency: concurrency.max(1),
        })
    }

    /// Fetches every job and returns one outcome per job, in input order.
    ///
    /// Failures stay local to their job; the batch always runs to completion.
    pub async fn download_all(&self, jobs: Vec<FetchJob>) -> Vec<FetchOutcome> {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));

        let overall_pb = Arc::new(ProgressBar::new(jobs.len() as u64));
        overall_pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg} {bar:40} {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        overall_pb.set_message("Images");

        let mut destinations = Vec::with_capacity(jobs.len());
        let mut handles = Vec::with_capacity(jobs.len());

        for job in jobs {
            destinations.push(job.destination.clone());
            let downloader = self.clone();
            let overall_pb = Arc::clone(&overall_pb);

            // Acquiring here keeps dispatch in input order.
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .expect("download semaphore is never closed");

            handles.push(task::spawn(async move {
                let result = downloader.download_file(&job).await;
                drop(permit);
                overall_pb.inc(1);
                result
            }));
        }

        let outcomes: Vec<FetchOutcome> = join_all(handles)
            .await
            .into_iter()
            .zip(destinations)
            .map(|(joined, destination)| {
                let result = joined.unwrap_or_else(|e| Err(FetchError::Task(e.to_string())));
                let status = match result {
                    Ok(()) => FetchStatus::Downloaded,
                    Err(e) => FetchStatus::Failed(e),
                };
                log_outcome(&destination, &status);
                FetchOutcome {
                    destination,
                    status,
                }
            })
            .collect();

        overall_pb.finish_and_clear();

        let summary = FetchSummary::from_outcomes(&outcomes);
        tracing::info!(
            "Done: {} downloaded, {} failed",
            summary.downloaded,
            summary.failed
        );

        outcomes
    }

    async fn download_file(&self, job: &FetchJob) -> Result<(), FetchError> {
        let mut response = self.client.get(&job.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&job.destination)
            .await?;

        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        Ok(())
    }
}

fn log_outcome(destination: &Path, status: &FetchStatus) {
    match status {
        FetchStatus::Downloaded => tracing::debug!("{} downloaded", destination.display()),
        FetchStatus::Failed(e) if e.is_network() => {
            tracing::warn!("{} not downloaded: {}", destination.display(), e)
        }
        FetchStatus::Failed(e) => tracing::debug!("{} not downloaded: {}", destination.display(), e),
    }
}
