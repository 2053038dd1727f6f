use anyhow::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::http::HttpClient;
use crate::runtime::Runtime;

/// Failure while preparing or writing the destination file.
#[derive(Debug)]
pub enum FilesystemError {
    /// A parent directory of the destination could not be created
    CreateDir(PathBuf, String),
    /// The downloaded bytes could not be written out
    WriteFile(PathBuf, String),
    /// The written file's metadata could not be read back
    Inspect(PathBuf, String),
}

impl std::fmt::Display for FilesystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilesystemError::CreateDir(path, msg) => {
                write!(f, "Failed to create directory {:?}: {}", path, msg)
            }
            FilesystemError::WriteFile(path, msg) => {
                write!(f, "Failed to write file {:?}: {}", path, msg)
            }
            FilesystemError::Inspect(path, msg) => {
                write!(f, "Failed to read metadata of {:?}: {}", path, msg)
            }
        }
    }
}

impl std::error::Error for FilesystemError {}

/// Downloads a URL and persists the whole body at the destination path,
/// creating parent directories as needed and overwriting any existing
/// file. Returns the byte count read back from the file on disk, so the
/// reported size reflects what was actually persisted.
///
/// Nothing is rolled back on failure: directories already created stay,
/// and the destination may be absent or truncated.
#[tracing::instrument(skip(runtime, http_client))]
pub async fn fetch_and_save<R: Runtime>(
    runtime: &R,
    http_client: &HttpClient,
    url: &str,
    destination: &Path,
) -> Result<u64> {
    info!("Downloading {} to {:?}...", url, destination);

    // A bare filename has an empty parent; nothing to create then.
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        runtime
            .create_dir_all(parent)
            .map_err(|e| FilesystemError::CreateDir(parent.to_path_buf(), format!("{:#}", e)))?;
    }

    let body = http_client.get_body(url).await?;

    runtime
        .write(destination, &body)
        .map_err(|e| FilesystemError::WriteFile(destination.to_path_buf(), format!("{:#}", e)))?;

    let size = runtime
        .file_size(destination)
        .map_err(|e| FilesystemError::Inspect(destination.to_path_buf(), format!("{:#}", e)))?;

    debug!("Wrote {} bytes to {:?}", size, destination);

    Ok(size)
}
