mod app;
mod cli;
mod config;
mod downloader;
mod error;
mod filenames;
mod har;
mod logging;
mod models;

use clap::Parser;
use cli::Args;
use config::RunConfig;
use error::HarDlError;

fn report(err: &HarDlError) -> ! {
    eprintln!("error: {}", err);
    if let Some(hint) = err.hint() {
        eprintln!("{}", hint);
    }
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match RunConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => report(&e),
    };

    logging::init_logging(config.log_level)?;

    if let Err(e) = app::run(&config).await {
        report(&e);
    }

    Ok(())
}
