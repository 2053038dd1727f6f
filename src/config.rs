//! Startup configuration: HTTP client and resolved paths.

use anyhow::{Context, Result};
use reqwest::Client;
use std::path::PathBuf;

use crate::release::DOWNLOAD_BASE;
use crate::runtime::Runtime;

/// User-Agent header sent with every request.
pub const USER_AGENT: &str = "pathist-buf-downloader";

/// Everything the fetch operation needs, resolved once at startup and
/// passed by value from there on.
#[derive(Debug)]
pub struct Config {
    pub client: Client,
    pub version: String,
    pub destination: PathBuf,
    pub base_url: String,
}

impl Config {
    #[tracing::instrument(skip(runtime, version, destination, base_url))]
    pub fn new<R: Runtime>(
        runtime: &R,
        version: String,
        destination: Option<PathBuf>,
        base_url: Option<String>,
    ) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        let destination = match destination {
            Some(path) => path,
            None => default_destination(runtime)?,
        };

        let base_url = base_url.unwrap_or_else(|| DOWNLOAD_BASE.to_string());

        Ok(Self {
            client,
            version,
            destination,
            base_url,
        })
    }
}

/// Default destination under the user's home directory.
fn default_destination<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let home = runtime
        .home_dir()
        .context("Could not determine home directory for the default destination")?;
    Ok(home.join("prj").join("bin").join("buf.exe"))
}
