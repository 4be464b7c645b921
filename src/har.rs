//! HAR (HTTP Archive) reader: pulls image URLs out of a recorded browser session.

use crate::error::HarDlError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const IMAGE_MIME_PREFIX: &str = "image/";

#[derive(Debug, Deserialize)]
struct HarFile {
    log: HarLog,
}

#[derive(Debug, Deserialize)]
struct HarLog {
    entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
struct HarEntry {
    request: HarRequest,
    response: HarResponse,
}

#[derive(Debug, Deserialize)]
struct HarRequest {
    url: String,
}

#[derive(Debug, Deserialize)]
struct HarResponse {
    content: HarContent,
}

#[derive(Debug, Deserialize)]
struct HarContent {
    #[serde(rename = "mimeType")]
    mime_type: String,
}

/// Returns the request URLs of every entry whose response is an image, in entry order.
pub fn read_image_urls(path: &Path) -> Result<Vec<String>, HarDlError> {
    let malformed = |reason: String| HarDlError::MalformedArchive {
        path: path.to_path_buf(),
        reason,
    };

    let bytes = fs::read(path).map_err(|e| malformed(e.to_string()))?;
    let har: HarFile = serde_json::from_slice(&bytes).map_err(|e| malformed(e.to_string()))?;

    let urls: Vec<String> = har
        .log
        .entries
        .into_iter()
        .filter(|entry| entry.response.content.mime_type.starts_with(IMAGE_MIME_PREFIX))
        .map(|entry| entry.request.url)
        .collect();

    tracing::debug!("Found {} image entries in {}", urls.len(), path.display());
    Ok(urls)
}
