//! Image Search Client
//!
//! `ImageSearch` is the seam both controllers fetch through. `PixabayClient`
//! is the production implementation; tests substitute scripted providers.

use super::types::{Query, SearchPage};
use crate::config::ProviderConfig;

use anyhow::{Context, Result};
use std::future::Future;

/// Fetches pages of image hits for a query.
pub trait ImageSearch: Send + Sync {
    /// Number of hits the provider returns per page.
    fn per_page(&self) -> u32;

    /// Fetches page `page` (1-based) for `query`.
    ///
    /// Network errors, non-2xx statuses and undecodable bodies are errors.
    fn fetch_page(
        &self,
        query: &Query,
        page: u32,
    ) -> impl Future<Output = Result<SearchPage>> + Send;
}

/// Pixabay REST API client.
#[derive(Debug, Clone)]
pub struct PixabayClient {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl PixabayClient {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, config })
    }

    /// Full request URL for one page.
    pub fn page_url(&self, query: &Query, page: u32) -> String {
        format!(
            "{}?key={}&q={}&image_type={}&orientation={}&safesearch={}&page={}&per_page={}",
            self.config.base_url,
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(query.as_str()),
            urlencoding::encode(&self.config.image_type),
            urlencoding::encode(&self.config.orientation),
            self.config.safe_search,
            page,
            self.config.per_page
        )
    }
}

impl ImageSearch for PixabayClient {
    fn per_page(&self) -> u32 {
        self.config.per_page
    }

    async fn fetch_page(&self, query: &Query, page: u32) -> Result<SearchPage> {
        anyhow::ensure!(page >= 1, "Page numbers start at 1, got {}", page);

        tracing::debug!("Fetching page {} for query '{}'", page, query);

        let resp = self
            .client
            .get(self.page_url(query, page))
            .send()
            .await
            .context("Image provider request failed")?
            .error_for_status()
            .context("Image provider returned an error status")?;

        let body = resp
            .json::<SearchPage>()
            .await
            .context("Image provider returned a malformed body")?;

        tracing::debug!(
            "Page {} for '{}': {} hits (totalHits={})",
            page,
            query,
            body.hits.len(),
            body.total_hits
        );

        Ok(body)
    }
}
