mod processor;

use std::path::PathBuf;

use processor::MatchProcessor;
use tracing::info;

use crate::clients::cricinfo::CricinfoClient;
use crate::config::Config;
use crate::error::Result;
use crate::export::{write_csv, BATTING_SCHEMA, GAME_SUMMARY_SCHEMA};

pub struct Processor {
    processor: MatchProcessor,
    out_dir: PathBuf,
}

impl Processor {
    pub fn new(config: Config) -> Self {
        let Config { args, http_client } = config;

        Self {
            processor: MatchProcessor::new(args.index_url, CricinfoClient::new(http_client)),
            out_dir: args.out_dir,
        }
    }

    pub async fn run(&self) -> Result<()> {
        self.ensure_dirs()?;

        let output = self.processor.process().await?;

        let summary_path = self
            .out_dir
            .join(format!("gameSummary{}.csv", output.year));
        write_csv(&output.summaries, GAME_SUMMARY_SCHEMA, &summary_path)?;
        info!("Data saved to CSV file: {}", summary_path.display());

        let batting_path = self
            .out_dir
            .join(format!("battingdata{}.csv", output.year));
        write_csv(&output.batting, BATTING_SCHEMA, &batting_path)?;
        info!("Data saved to CSV file: {}", batting_path.display());

        Ok(())
    }

    fn ensure_dirs(&self) -> Result<()> {
        if !self.out_dir.exists() {
            std::fs::create_dir_all(&self.out_dir)?;
        }
        Ok(())
    }
}
