use crate::error::{Result, ScrapeError};
use reqwest::Client;
use scraper::Html;
use tracing::debug;

/// Scorecard links on the results index are host-relative.
pub const BASE_URL: &str = "https://www.espncricinfo.com";

#[derive(Debug, Clone)]
pub struct CricinfoClient {
    client: Client,
}

impl CricinfoClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches a page and parses it into a queryable document.
    pub async fn fetch_document(&self, url: &str) -> Result<Html> {
        debug!("Fetching {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(ScrapeError::Parse(format!("empty document from {url}")));
        }
        Ok(Html::parse_document(&body))
    }
}

pub fn resolve(href: &str) -> String {
    format!("{BASE_URL}{href}")
}
