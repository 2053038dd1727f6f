//! The fetch operation: resolve a release location for the current
//! architecture and download it.

use anyhow::Result;
use std::path::PathBuf;

use crate::{
    config::Config,
    download::fetch_and_save,
    http::HttpClient,
    release::{self, Arch},
    runtime::Runtime,
};

/// What a completed fetch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub tag: String,
    pub destination: PathBuf,
    pub bytes: u64,
}

/// Entry point used by the CLI: builds the configuration, then runs.
#[tracing::instrument(skip(runtime, version, destination, base_url))]
pub async fn fetch<R: Runtime>(
    runtime: R,
    version: String,
    destination: Option<PathBuf>,
    base_url: Option<String>,
) -> Result<FetchOutcome> {
    let config = Config::new(&runtime, version, destination, base_url)?;
    run(&runtime, &config).await
}

/// Detects the architecture, resolves the release location and
/// downloads it to the configured destination.
#[tracing::instrument(skip(runtime, config))]
pub async fn run<R: Runtime>(runtime: &R, config: &Config) -> Result<FetchOutcome> {
    let arch = Arch::detect()?;
    let location = release::release_location_at(&config.base_url, &config.version, arch);

    println!("Downloading buf ({}) from {} ...", arch, location.url);

    let http_client = HttpClient::new(config.client.clone());
    let bytes = fetch_and_save(runtime, &http_client, &location.url, &config.destination).await?;

    println!("Downloaded version tag: {}", location.tag);
    println!("Saved to {} ({} bytes)", config.destination.display(), bytes);

    Ok(FetchOutcome {
        tag: location.tag,
        destination: config.destination.clone(),
        bytes,
    })
}
