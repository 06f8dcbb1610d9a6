//! Page fetcher for the applications list endpoint

use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{next_link, parse_link_header, PageRequest, PageResponse};
use crate::types::Application;
use async_trait::async_trait;
use reqwest::header::LINK;
use serde_json::Value;
use tracing::debug;

/// Path of the list endpoint, relative to the base URL
pub const APPLICATIONS_PATH: &str = "applications";

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Source of pages for the infinite list
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one page
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResponse>;
}

/// HTTP-backed fetcher for `GET {base_url}/applications?_page=N&_limit=M`
#[derive(Debug)]
pub struct ApplicationsApi {
    client: HttpClient,
}

impl ApplicationsApi {
    /// Create a fetcher against `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let config = HttpClientConfig::builder().base_url(base_url).build();
        Self::with_config(config)
    }

    /// Create a fetcher with a custom HTTP config.
    ///
    /// Falls back to [`DEFAULT_BASE_URL`] when the config has no base URL.
    pub fn with_config(mut config: HttpClientConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .get_or_insert_with(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(base_url)?;

        Ok(Self {
            client: HttpClient::with_config(config)?,
        })
    }

    /// Wrap an existing client
    pub fn from_client(client: HttpClient) -> Self {
        Self { client }
    }

    /// Fetch `page` with an optional page size (default 5)
    pub async fn fetch_applications(&self, page: u32, limit: Option<u32>) -> Result<PageResponse> {
        let mut request = PageRequest::new(page);
        if let Some(limit) = limit {
            request = request.with_limit(limit);
        }
        self.fetch_page(request).await
    }

    /// Full URL of the list endpoint
    pub fn endpoint(&self) -> String {
        self.client.build_url(APPLICATIONS_PATH)
    }
}

#[async_trait]
impl PageFetcher for ApplicationsApi {
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResponse> {
        request.validate()?;

        let mut config = RequestConfig::new();
        for (key, value) in request.query_params() {
            config = config.query(key, value);
        }

        let response = self
            .client
            .get_with_config(APPLICATIONS_PATH, config)
            .await?;

        // HeaderMap lookups are case-insensitive
        let link = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.text().await?;
        let items = decode_items(&body)?;
        let pagination = parse_link_header(link.as_deref());

        debug!(
            page = request.page,
            limit = request.limit,
            items = items.len(),
            has_next_page = pagination.has_next_page,
            next = ?link.as_deref().and_then(next_link),
            "Fetched applications page"
        );

        Ok(PageResponse { items, pagination })
    }
}

/// Decode a response body that must be a JSON array of applications
pub fn decode_items(body: &str) -> Result<Vec<Application>> {
    let value: Value = serde_json::from_str(body)?;
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(Error::from))
            .collect(),
        _ => Err(Error::Shape),
    }
}
