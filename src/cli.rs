use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "har-img-dl")]
#[command(author, version, about = "Download the images recorded in a HAR file", long_about = None)]
pub struct Args {
    /// Number of parallel downloads
    #[arg(long, default_value = "2")]
    pub threads: usize,

    /// HAR file to read image URLs from
    #[arg(long, default_value = "har.json")]
    pub file: PathBuf,

    /// Output directory, must not exist yet (default: <install-dir>/downloaded_img)
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Regex with one capture group used to derive image filenames
    #[arg(long, default_value = r"%2F(.*)\?")]
    pub regex: String,

    /// Log level (DEBUG, INFO, WARNING, ERROR, CRITICAL)
    #[arg(long, default_value = "INFO")]
    pub log: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "300")]
    pub timeout: u64,

    /// HTTP proxy (e.g., http://127.0.0.1:7890)
    #[arg(long)]
    pub proxy: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let args = Args::try_parse_from(["har-img-dl"]).unwrap();
        assert_eq!(args.threads, 2);
        assert_eq!(args.file, PathBuf::from("har.json"));
        assert!(args.directory.is_none());
        assert_eq!(args.regex, r"%2F(.*)\?");
        assert_eq!(args.log, "INFO");
        assert_eq!(args.timeout, 300);
        assert!(args.proxy.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "har-img-dl",
            "--threads",
            "8",
            "--file",
            "capture.har",
            "--directory",
            "/tmp/out",
            "--log",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.threads, 8);
        assert_eq!(args.file, PathBuf::from("capture.har"));
        assert_eq!(args.directory, Some(PathBuf::from("/tmp/out")));
        assert_eq!(args.log, "debug");
    }
}
