use crate::error::HarDlError;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Creates `directory` (and missing parents) and maps every URL to a file inside it.
///
/// The output has the same length and order as `urls`. A URL matching `pattern`
/// is named after the first capture group, any other URL after its last `/` segment.
/// A name that is not a single plain path component falls back to the last segment;
/// if that is unusable too, the destination is `directory` itself, which fails to
/// open as a file so the item is reported as failed.
/// Fails if `directory` already exists.
pub fn resolve_destinations(
    pattern: &Regex,
    directory: &Path,
    urls: &[String],
) -> Result<Vec<PathBuf>, HarDlError> {
    create_output_dir(directory)?;

    Ok(urls
        .iter()
        .map(|url| match file_name_for(pattern, url) {
            Some(name) => directory.join(name),
            None => {
                tracing::warn!("No usable file name in {}", url);
                directory.to_path_buf()
            }
        })
        .collect())
}

fn create_output_dir(directory: &Path) -> Result<(), HarDlError> {
    let creation_failed = |source: std::io::Error| HarDlError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    };

    if let Some(parent) = directory.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(creation_failed)?;
    }

    match fs::create_dir(directory) {
        Ok(()) => {
            tracing::debug!("Folder was created: {}", directory.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(HarDlError::DirectoryExists {
            path: directory.to_path_buf(),
        }),
        Err(e) => Err(creation_failed(e)),
    }
}

fn file_name_for<'a>(pattern: &Regex, url: &'a str) -> Option<&'a str> {
    pattern
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| is_plain_file_name(name))
        .or_else(|| url.rsplit('/').next().filter(|name| is_plain_file_name(name)))
}

/// True when `name` joins onto a directory as exactly one child entry.
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
