use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use shared_types::PlaceSummary;

use crate::error::PlacesError;

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    title: String,
    extract: Option<String>,
    thumbnail: Option<Thumbnail>,
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: String,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<PageUrl>,
}

#[derive(Debug, Deserialize)]
struct PageUrl {
    page: String,
}

impl From<SummaryResponse> for PlaceSummary {
    fn from(summary: SummaryResponse) -> Self {
        PlaceSummary {
            title: summary.title,
            extract: summary.extract.filter(|e| !e.is_empty()),
            thumbnail_url: summary.thumbnail.map(|t| t.source),
            page_url: summary
                .content_urls
                .and_then(|urls| urls.desktop)
                .map(|desktop| desktop.page),
        }
    }
}

/// Page summaries from the Wikipedia REST API.
#[derive(Clone)]
pub struct WikipediaClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl WikipediaClient {
    pub fn new(client: Client, base_url: String, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Looks up `title`. A missing page is `Ok(None)`, not an error.
    pub async fn summary(&self, title: &str) -> Result<Option<PlaceSummary>, PlacesError> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        let url = format!(
            "{}/page/summary/{}",
            self.base_url,
            urlencoding::encode(title)
        );

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| PlacesError::from_reqwest(e, self.timeout))?;

        if !response.status().is_success() {
            tracing::debug!(
                "No Wikipedia summary for {:?} (status {})",
                title,
                response.status()
            );
            return Ok(None);
        }

        let summary = response
            .json::<SummaryResponse>()
            .await
            .map_err(|e| PlacesError::from_reqwest(e, self.timeout))?;

        Ok(Some(summary.into()))
    }
}
