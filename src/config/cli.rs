use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Default tournament: ICC World Cup 2002-03.
const DEFAULT_INDEX_URL: &str =
    "https://www.espncricinfo.com/records/tournament/team-match-results/icc-world-cup-2002-03-865";

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Tournament results index page to scrape
    #[arg(long, env = "CRICSCRAPE_INDEX_URL", default_value = DEFAULT_INDEX_URL)]
    pub index_url: String,

    /// Directory to write the CSV output files
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}
