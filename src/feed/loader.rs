use crate::digest::FeedDocument;
use crate::feed::date::previous_date_key;
use chrono::Utc;
use futures::StreamExt;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use std::time::Duration;
use thiserror::Error;
use url::Url;

const MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Query parameter carrying the cache-busting timestamp on document requests.
pub const CACHE_BUST_PARAM: &str = "t";

/// Errors that can occur while retrieving a digest or its markdown sibling.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("Document not found: HTTP status {0}")]
    NotFound(u16),
    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,
    /// Body is not a JSON document
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Response body exceeded the 10MB size limit
    #[error("Response too large")]
    ResponseTooLarge,
    /// Markdown body is not UTF-8
    #[error("Invalid UTF-8 in response")]
    InvalidUtf8,
    /// Document URL could not be built from the base URL and date key
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Base URL cannot carry path segments (e.g. `mailto:`)
    #[error("Base URL cannot be used for documents: {0}")]
    InvalidBaseUrl(String),
}

/// How the boot-time document was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentOrigin {
    /// The requested date's document.
    Primary,
    /// The previous day's document, after the requested one failed.
    Fallback,
    /// Both attempts failed; an empty document stands in.
    Empty,
}

/// Result of the boot-time load policy.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: FeedDocument,
    /// Date key whose document was loaded, `None` for [`DocumentOrigin::Empty`].
    pub date_key: Option<String>,
    pub origin: DocumentOrigin,
}

impl LoadedDocument {
    pub fn empty() -> Self {
        Self {
            document: FeedDocument::empty(),
            date_key: None,
            origin: DocumentOrigin::Empty,
        }
    }
}

/// Fetches digest documents from `<base_url>/<data_dir>/`.
#[derive(Debug, Clone)]
pub struct FeedLoader {
    client: reqwest::Client,
    data_url: Url,
    timeout: Duration,
}

impl FeedLoader {
    /// Build a loader rooted at `base_url`.
    ///
    /// A missing trailing slash on `base_url` is added, so both
    /// `https://host/digest` and `https://host/digest/` resolve documents
    /// under `https://host/digest/<data_dir>/`.
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        data_dir: &str,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let mut base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(base_url.to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let dir = data_dir.trim_matches('/');
        let data_url = if dir.is_empty() {
            base
        } else {
            base.join(&format!("{}/", dir))?
        };

        Ok(Self {
            client,
            data_url,
            timeout,
        })
    }

    /// URL of the JSON document for `date_key`, with an optional cache-busting value.
    pub fn document_url(&self, date_key: &str, cache_bust: Option<i64>) -> Result<Url, FetchError> {
        let mut url = self.file_url(&format!("{}.json", date_key))?;
        if let Some(value) = cache_bust {
            url.query_pairs_mut()
                .append_pair(CACHE_BUST_PARAM, &value.to_string());
        }
        Ok(url)
    }

    /// URL of the markdown sibling for `date_key`.
    pub fn markdown_url(&self, date_key: &str) -> Result<Url, FetchError> {
        self.file_url(&format!("{}.md", date_key))
    }

    // The date key is untrusted input; pushing it as a single segment
    // percent-encodes any '/' so it cannot escape the data directory.
    fn file_url(&self, file_name: &str) -> Result<Url, FetchError> {
        let mut url = self.data_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(self.data_url.to_string()))?
            .pop_if_empty()
            .push(file_name);
        Ok(url)
    }

    /// Fetch and parse the document for `date_key`.
    ///
    /// No schema validation happens: missing, `null` or mistyped fields take the
    /// defaults of [`FeedDocument`], so only a body that is not JSON fails.
    ///
    /// # Errors
    ///
    /// - [`FetchError::NotFound`] - non-2xx response
    /// - [`FetchError::Network`] / [`FetchError::Timeout`] - transport failures
    /// - [`FetchError::Parse`] - body is not valid JSON
    /// - [`FetchError::ResponseTooLarge`] - body exceeds 10MB
    pub async fn load_document(&self, date_key: &str) -> Result<FeedDocument, FetchError> {
        let url = self.document_url(date_key, Some(Utc::now().timestamp_millis()))?;
        let bytes = self.get_bytes(url).await?;
        let document: FeedDocument = serde_json::from_slice(&bytes)?;

        tracing::debug!(
            date = %date_key,
            items = document.items.total(),
            "Loaded digest document"
        );
        Ok(document)
    }

    /// Fetch the markdown sibling for `date_key` as text.
    pub async fn load_markdown(&self, date_key: &str) -> Result<String, FetchError> {
        let url = self.markdown_url(date_key)?;
        let bytes = self.get_bytes(url).await?;
        String::from_utf8(bytes).map_err(|_| FetchError::InvalidUtf8)
    }

    /// Boot-time load policy.
    ///
    /// Tries `date_key`, then the day before. If both fail, returns an empty
    /// document so the view can still mount. Attempts are strictly sequential
    /// and never retried.
    pub async fn load_with_fallback(&self, date_key: &str) -> LoadedDocument {
        match self.load_document(date_key).await {
            Ok(document) => {
                return LoadedDocument {
                    document,
                    date_key: Some(date_key.to_string()),
                    origin: DocumentOrigin::Primary,
                }
            }
            Err(e) => {
                tracing::warn!(date = %date_key, error = %e, "Digest unavailable, trying previous day");
            }
        }

        let Some(previous) = previous_date_key(date_key) else {
            tracing::warn!(date = %date_key, "Date key is not a calendar date, no fallback possible");
            return LoadedDocument::empty();
        };

        match self.load_document(&previous).await {
            Ok(document) => {
                tracing::info!(date = %previous, "Loaded previous day's digest");
                LoadedDocument {
                    document,
                    date_key: Some(previous),
                    origin: DocumentOrigin::Fallback,
                }
            }
            Err(e) => {
                tracing::warn!(date = %previous, error = %e, "Fallback digest unavailable, mounting empty view");
                LoadedDocument::empty()
            }
        }
    }

    async fn get_bytes(&self, url: Url) -> Result<Vec<u8>, FetchError> {
        let request = self
            .client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send();

        let response = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| FetchError::Timeout)?
            .map_err(FetchError::Network)?;

        if !response.status().is_success() {
            tracing::debug!(url = %url, status = %response.status(), "Fetch returned non-success status");
            return Err(FetchError::NotFound(response.status().as_u16()));
        }

        read_limited_bytes(response, MAX_DOCUMENT_SIZE).await
    }
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
