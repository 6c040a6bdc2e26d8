//! HTTP client for the lava-vtt server API.
//!
//! Three endpoints: `HEAD /api/image/{hash}` (existence probe),
//! `POST /api/image` (raw image bytes), `POST /api/display` (JSON display
//! command). Uses curl Easy handles; each call is blocking and independent.

use std::time::Duration;
use thiserror::Error;

/// Error from a server API call. Transport failures (server unreachable) are
/// kept distinct from HTTP-level failures so callers can word notices
/// accordingly.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured server address did not parse as a URL.
    #[error("invalid server address: {0}")]
    InvalidAddress(String),
    /// curl could not complete the request (DNS, refused connection, timeout).
    #[error("server not reachable: {0}")]
    Unreachable(#[from] curl::Error),
    /// The server answered with a non-success status.
    #[error("server returned HTTP {status}")]
    Http { status: u32 },
}

/// Client for one lava-vtt server, holding the validated base address.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base API prefix without trailing slash, e.g. `http://localhost:3000/api`.
    api_base: String,
}

impl ApiClient {
    /// Builds a client for the given server address, e.g. `http://localhost:3000`.
    pub fn new(server_address: &str) -> Result<Self, ApiError> {
        let trimmed = server_address.trim_end_matches('/');
        url::Url::parse(trimmed)
            .map_err(|_| ApiError::InvalidAddress(server_address.to_string()))?;
        Ok(Self {
            api_base: format!("{}/api", trimmed),
        })
    }

    pub fn image_url(&self, hash: &str) -> String {
        format!("{}/image/{}", self.api_base, hash)
    }

    pub fn upload_url(&self) -> String {
        format!("{}/image", self.api_base)
    }

    pub fn display_url(&self) -> String {
        format!("{}/display", self.api_base)
    }

    /// Probes whether the server already stores an image with this hash.
    ///
    /// `Ok(true)` only for status exactly 200; any other status means the
    /// image should be uploaded. Only transport failures are errors.
    pub fn image_exists(&self, hash: &str) -> Result<bool, ApiError> {
        let mut easy = configured_easy(&self.image_url(hash))?;
        easy.nobody(true)?; // HEAD request
        easy.perform()?;
        let code = easy.response_code()?;
        tracing::debug!("existence probe for {} returned HTTP {}", hash, code);
        Ok(code == 200)
    }

    /// Uploads raw image bytes as `application/octet-stream`.
    pub fn upload_image(&self, bytes: &[u8]) -> Result<(), ApiError> {
        self.post(
            &self.upload_url(),
            bytes,
            "Content-Type: application/octet-stream",
        )
    }

    /// Asks the server to display the image with this content hash.
    pub fn display(&self, hash: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "hash": hash }).to_string();
        self.post(
            &self.display_url(),
            body.as_bytes(),
            "Content-Type: application/json",
        )
    }

    fn post(&self, url: &str, body: &[u8], content_type: &str) -> Result<(), ApiError> {
        let mut easy = configured_easy(url)?;
        easy.post(true)?;
        easy.post_fields_copy(body)?;

        let mut list = curl::easy::List::new();
        list.append(content_type)?;
        easy.http_headers(list)?;

        easy.perform()?;
        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(ApiError::Http { status: code });
        }
        Ok(())
    }
}

fn configured_easy(url: &str) -> Result<curl::easy::Easy, ApiError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(30))?;
    Ok(easy)
}
