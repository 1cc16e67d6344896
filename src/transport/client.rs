//! Reqwest-backed transport adapter.
//!
//! Builds one immutable `reqwest::blocking::Client` at construction time
//! and implements the [`Transport`] contract over it. The client carries
//! the `Authorization` header and SDK user agent on every request, leaves
//! response bytes uncompressed, and never raises on non-2xx statuses by
//! itself, so status interpretation stays with the caller.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

use crate::models::{ApiResponse, HttpMethod};
use crate::transport::config::TransportConfig;
use crate::transport::error::TransportError;
use crate::transport::status::interpret_failure_status;
use crate::transport::{validate_url, Transport};

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// HTTP transport adapter over `reqwest::blocking::Client`.
///
/// The adapter holds no mutable state; concurrent use from multiple
/// callers is as safe as the underlying client, which is thread-safe.
pub struct ReqwestTransport {
    /// The underlying HTTP client, built once and immutable afterwards.
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport for the given access key with default settings.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use messaging_transport::ReqwestTransport;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let transport = ReqwestTransport::new("live_abc123")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(access_key: impl Into<String>) -> Result<Self, TransportError> {
        Self::with_config(TransportConfig::new(access_key))
    }

    /// Creates a transport from an explicit configuration.
    ///
    /// Fails with `TransportError::General` if the configuration is
    /// invalid or the HTTP client cannot be built.
    pub fn with_config(config: TransportConfig) -> Result<Self, TransportError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&config.authorization_header())
            .map_err(|e| TransportError::General(format!("invalid access key: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        // no_gzip keeps response bytes exactly as the server sent them.
        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent())
            .no_gzip()
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn send_request<P: Serialize>(
        &self,
        method: &str,
        url: &str,
        payload: Option<&P>,
    ) -> Result<ApiResponse, TransportError> {
        let method = HttpMethod::from_str(method)
            .ok_or_else(|| TransportError::InvalidMethod(method.to_string()))?;
        validate_url(url)?;

        debug!("{} {}", method, url);

        // The content type follows the verb, not the payload: POST, PUT
        // and PATCH are JSON, everything else is form-URL-encoded even
        // when no body is attached.
        let mut builder = self.client.request(method.as_reqwest(), url);
        builder = match (method.uses_json_body(), payload) {
            (true, Some(p)) => builder.json(p),
            (false, Some(p)) => builder.form(p),
            (true, None) => builder.header(CONTENT_TYPE, CONTENT_TYPE_JSON),
            (false, None) => builder.header(CONTENT_TYPE, CONTENT_TYPE_FORM),
        };

        let response = builder.send()?;
        let status_code = response.status().as_u16();
        let body = response.text()?;

        debug!("{} {} -> {}", method, url, status_code);

        Ok(ApiResponse::new(body, status_code))
    }

    fn download_file(&self, url: &str, file_path: &Path) -> Result<PathBuf, TransportError> {
        validate_url(url)?;

        debug!("GET {} -> {}", url, file_path.display());

        let mut response = self.client.get(url).send()?;
        let status_code = response.status().as_u16();

        if response.status().is_success() {
            // Streamed straight to disk; a write failure mid-stream may
            // leave a partial file behind.
            let mut file = File::create(file_path)?;
            io::copy(&mut response, &mut file)?;
            Ok(file_path.to_path_buf())
        } else {
            let body = response.text()?;
            warn!("GET {} failed with status {}", url, status_code);
            Err(interpret_failure_status(status_code, &body))
        }
    }

    fn open_raw_connection(&self, _url: &str) -> Result<Box<dyn Read>, TransportError> {
        Err(TransportError::Unsupported(
            "raw connections are not available on this transport; use send_request".to_string(),
        ))
    }
}
