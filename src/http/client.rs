//! HTTP client for fetching release artifacts.

use anyhow::Result;
use log::debug;
use reqwest::Client;

use super::status::{check_status, incomplete_body, request_failed};

/// Thin wrapper over a reqwest Client that fetches a response body in
/// one piece. Failures are classified as `NetworkError` and never
/// retried.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and buffers the entire response body.
    #[tracing::instrument(skip(self))]
    pub async fn get_body(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}...", url);

        let response = self.client.get(url).send().await.map_err(request_failed)?;

        let response = response.error_for_status().map_err(check_status)?;

        let body = response.bytes().await.map_err(incomplete_body)?;

        debug!("Received {:.2} MB", body.len() as f64 / (1024.0 * 1024.0));

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::NetworkError;

    #[tokio::test]
    async fn test_get_body_success() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/buf.exe")
            .with_status(200)
            .with_body("binary bytes")
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let body = client.get_body(&format!("{}/buf.exe", url)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(body, b"binary bytes");
    }

    #[tokio::test]
    async fn test_get_body_empty_response() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/empty")
            .with_status(200)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let body = client.get_body(&format!("{}/empty", url)).await.unwrap();

        mock.assert_async().await;
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_get_body_not_found() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/buf.exe")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let err = client
            .get_body(&format!("{}/buf.exe", url))
            .await
            .unwrap_err();

        mock.assert_async().await;
        match err.downcast_ref::<NetworkError>() {
            Some(NetworkError::HttpStatus(code, _)) => assert_eq!(*code, 404),
            other => panic!("Expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_body_unreachable_server() {
        let client = HttpClient::new(Client::new());
        let err = client
            .get_body("http://127.0.0.1:1/buf.exe")
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<NetworkError>(),
            Some(NetworkError::RequestFailed(_))
        ));
    }
}
