use crate::config::Config;
use crate::error::Result;
use crate::processor::Processor;
use tracing::info;

mod clients;
mod config;
mod error;
mod export;
mod processor;
mod scrapers;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;
    tracing_subscriber::fmt()
        .with_max_level(config.args.log_level)
        .init();

    let scraper = Processor::new(config);
    scraper.run().await?;

    info!("Scraping completed successfully!");
    Ok(())
}
