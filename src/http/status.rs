//! Classification of transport and HTTP status failures.

/// Errors raised by the HTTP layer. None of these are retried; they
/// surface to the caller and terminate the program.
#[derive(Debug)]
pub enum NetworkError {
    /// The request could not be sent or the connection failed
    RequestFailed(String),
    /// The server answered with a non-success status code
    HttpStatus(u16, String),
    /// The response body could not be read in full
    IncompleteBody(String),
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkError::RequestFailed(msg) => {
                write!(f, "Request failed: {}", msg)
            }
            NetworkError::HttpStatus(code, url) => {
                write!(f, "Server returned HTTP {} for {}", code, url)
            }
            NetworkError::IncompleteBody(msg) => {
                write!(f, "Failed to read response body: {}", msg)
            }
        }
    }
}

impl std::error::Error for NetworkError {}

/// Maps an error from `error_for_status()` to a NetworkError carrying
/// the status code and URL for diagnostics.
pub(super) fn check_status(error: reqwest::Error) -> anyhow::Error {
    match error.status() {
        Some(code) => {
            let url = error.url().map(|u| u.to_string()).unwrap_or_default();
            anyhow::Error::from(NetworkError::HttpStatus(code.as_u16(), url))
        }
        None => anyhow::Error::from(NetworkError::RequestFailed(error.to_string())),
    }
}

/// Wraps a transport-level failure (connect, TLS, DNS) from sending a
/// request.
pub(super) fn request_failed(error: reqwest::Error) -> anyhow::Error {
    anyhow::Error::from(NetworkError::RequestFailed(error.to_string()))
}

/// Wraps a failure to read the response body to completion.
pub(super) fn incomplete_body(error: reqwest::Error) -> anyhow::Error {
    anyhow::Error::from(NetworkError::IncompleteBody(error.to_string()))
}
