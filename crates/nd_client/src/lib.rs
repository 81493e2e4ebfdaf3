//! Clients for the upstream NewsAPI and for a running newsdeck proxy.

use async_trait::async_trait;
use nd_core::{Error, NewsResponse, Result};
use tracing::{info, warn};
use url::Url;

pub const NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

/// The environment variable holding the server-side NewsAPI credential.
pub const API_KEY_VAR: &str = "NEWS_API_KEY";

/// Search parameters with the upstream defaults.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub q: String,
    pub language: String,
    pub sort_by: String,
    pub page_size: u32,
    pub search_in: String,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            q: "news".to_string(),
            language: "en".to_string(),
            sort_by: "relevancy".to_string(),
            page_size: 30,
            search_in: "title,description".to_string(),
        }
    }
}

impl SearchRequest {
    /// A request for a specific query; an empty query falls back to the
    /// default "news".
    pub fn for_query(q: &str) -> Self {
        let mut request = Self::default();
        if !q.is_empty() {
            request.q = q.to_string();
        }
        request
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.q.clone()),
            ("language", self.language.clone()),
            ("sortBy", self.sort_by.clone()),
            ("pageSize", self.page_size.to_string()),
            ("searchIn", self.search_in.clone()),
        ]
    }
}

/// Anything that can answer a news search: the upstream API directly, a
/// newsdeck proxy, or a mock in tests.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<NewsResponse>;
}

/// Direct NewsAPI client holding the server-side credential.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: Url,
}

impl NewsApiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            // NEWS_API_URL is a known-good constant.
            base_url: Url::parse(NEWS_API_URL).expect("NewsAPI base url parses"),
        }
    }

    /// Read the credential from `NEWS_API_KEY`. A missing key is the
    /// misconfiguration error, surfaced as-is and never retried.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(Error::MissingApiKey),
        }
    }

    /// Point the client somewhere else, e.g. a stand-in server in tests.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url =
            Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(self)
    }

    fn request_url(&self, request: &SearchRequest) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().clear();
        for (key, value) in request.query_pairs() {
            url.query_pairs_mut().append_pair(key, &value);
        }
        url
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn search(&self, request: &SearchRequest) -> Result<NewsResponse> {
        let url = self.request_url(request);
        info!(q = %request.q, "🔎 querying NewsAPI");

        let response = self
            .http
            .get(url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "NewsAPI answered with an error");
            return Err(Error::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                detail,
            });
        }

        let body: NewsResponse = response.json().await?;
        info!(articles = body.articles.len(), "📰 NewsAPI answered");
        Ok(body)
    }
}

/// Client for a running newsdeck proxy's `/api/news` endpoint, the way
/// the browser front-end consumed it. No credential needed; the proxy
/// holds it.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ProxyClient {
    /// `base_url` is the proxy root, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: &str) -> Result<Self> {
        let root =
            Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let endpoint = root
            .join("/api/news")
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }
}

#[async_trait]
impl NewsSource for ProxyClient {
    async fn search(&self, request: &SearchRequest) -> Result<NewsResponse> {
        let mut url = self.endpoint.clone();
        for (key, value) in request.query_pairs() {
            url.query_pairs_mut().append_pair(key, &value);
        }

        info!(q = %request.q, "🔎 querying newsdeck proxy");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                detail,
            });
        }

        Ok(response.json().await?)
    }
}
