//! Reqwest-backed client for the upstream employee service.
//!
//! Owns transport details only: URL building, timeouts, status checks and
//! decoding the response body into a JSON object. Envelope interpretation
//! lives in [`crate::repository::envelope`].

use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::repository::errors::{RepositoryError, RepositoryResult};

const BODY_PREVIEW_CHAR_LIMIT: usize = 160;

/// Decoded upstream response body.
pub type JsonObject = Map<String, Value>;

/// Thin HTTP client bound to the upstream base address.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: Client,
    base_url: Url,
}

impl UpstreamClient {
    /// Builds a client with explicit connect and read timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error when the base address cannot be parsed or the reqwest
    /// client cannot be constructed.
    pub fn new(
        base_url: &str,
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> RepositoryResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RepositoryError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(RepositoryError::InvalidUrl(base_url.to_string()));
        }

        let http = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(read_timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Appends percent-encoded `segments` to the base address.
    fn url(&self, segments: &[&str]) -> RepositoryResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RepositoryError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Performs a single request and decodes the body of a 2xx response.
    ///
    /// An empty 2xx body decodes as an empty object. Non-2xx statuses,
    /// network failures and timeouts are returned as errors; nothing is
    /// retried.
    pub async fn send<B>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> RepositoryResult<JsonObject>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(RepositoryError::Status {
                status: status.as_u16(),
                message: body_preview(&bytes),
            });
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonObject::new());
        }

        serde_json::from_slice::<JsonObject>(&bytes)
            .map_err(|e| RepositoryError::Decode(format!("response is not a JSON object: {e}")))
    }
}

fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact
        .chars()
        .take(BODY_PREVIEW_CHAR_LIMIT)
        .collect::<String>();
    if compact.chars().count() > BODY_PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else if preview.is_empty() {
        "empty response body".to_string()
    } else {
        preview
    }
}
