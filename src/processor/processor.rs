use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::clients::cricinfo::CricinfoClient;
use crate::error::{Result, ScrapeError};
use crate::scrapers::batting::{extract_batting_summary, BattingRecord};
use crate::scrapers::match_results::{extract_match_summaries, match_links, MatchSummary};

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());

/// Everything one run produces, ready for export.
pub struct ScrapeOutput {
    pub year: String,
    pub summaries: Vec<MatchSummary>,
    pub batting: Vec<BattingRecord>,
}

pub struct MatchProcessor {
    index_url: String,
    client: CricinfoClient,
}

impl MatchProcessor {
    pub fn new(index_url: String, client: CricinfoClient) -> Self {
        Self { index_url, client }
    }

    pub async fn process(&self) -> Result<ScrapeOutput> {
        let year = extract_year(&self.index_url)?;

        // Step 1: the index page drives everything; failure here is fatal.
        info!("Step 1: Getting match summaries...");
        let summaries = {
            let index = self.client.fetch_document(&self.index_url).await?;
            extract_match_summaries(&index)
        };
        if summaries.is_empty() {
            return Err(ScrapeError::Shape(format!(
                "no results table rows at {}",
                self.index_url
            )));
        }

        info!("Step 2: Getting scorecard links...");
        let links = match_links(&summaries);
        info!("Found {} scorecard links for {}", links.len(), year);

        // Step 3: detail pages one after another, in discovery order. A page
        // that fails contributes an error batch, never aborts the loop.
        info!("Step 3: Getting batting summaries...");
        let mut batches = Vec::with_capacity(links.len());
        for url in &links {
            let batch = self.scrape_batting(url).await;
            batches.push((url.clone(), batch));
        }

        info!("Step 4: Aggregating batting records...");
        let batting = aggregate(batches);

        Ok(ScrapeOutput {
            year,
            summaries,
            batting,
        })
    }

    async fn scrape_batting(&self, url: &str) -> Result<Vec<BattingRecord>> {
        let document = self.client.fetch_document(url).await?;
        Ok(extract_batting_summary(&document))
    }
}

/// The output files are named by the 4-digit year token in the index URL.
pub fn extract_year(url: &str) -> Result<String> {
    YEAR.find(url)
        .map(|token| token.as_str().to_string())
        .ok_or_else(|| ScrapeError::Parse(format!("no 4-digit year token in {url}")))
}

/// Flattens per-page batches in input order. Failed and empty batches
/// contribute nothing and are logged as skips.
pub fn aggregate(batches: Vec<(String, Result<Vec<BattingRecord>>)>) -> Vec<BattingRecord> {
    let mut records = Vec::new();

    for (url, batch) in batches {
        match batch {
            Ok(rows) if rows.is_empty() => warn!("No batting records found at {url}"),
            Ok(mut rows) => records.append(&mut rows),
            Err(e) => warn!("Skipping {url}: {e}"),
        }
    }

    records
}
