use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// bufget - buf release downloader
///
/// Downloads a prebuilt buf executable for Windows from the bufbuild/buf
/// GitHub releases, picking the variant that matches the current CPU
/// architecture.
///
/// Examples:
///   bufget                       # latest release, default destination
///   bufget --version 1.28.1      # a specific release
#[derive(Parser, Debug)]
#[command(author, about)]
struct Cli {
    /// Release version to download: "latest" or an explicit version
    /// such as "1.28.1" (a leading "v" is optional)
    #[arg(long = "version", value_name = "VERSION", default_value = "latest")]
    version: String,

    /// File path to write the downloaded executable to
    /// (defaults to prj/bin/buf.exe under the home directory)
    #[arg(long = "destination", short = 'd', value_name = "PATH")]
    destination: Option<PathBuf>,

    /// Releases base URL (defaults to https://github.com/bufbuild/buf/releases)
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = bufget::runtime::RealRuntime;

    bufget::fetch::fetch(runtime, cli.version, cli.destination, cli.base_url).await?;
    Ok(())
}
