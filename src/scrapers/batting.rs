use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::warn;

use super::{collapse_ws, data_rows};
use crate::export::CsvRecord;

static SPANS: Lazy<Selector> = Lazy::new(|| Selector::parse("span").unwrap());
static SCORECARD_TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div > table.ci-scorecard-table").unwrap());
static BATSMAN_NAME: Lazy<Selector> = Lazy::new(|| Selector::parse("a > span > span").unwrap());
static DISMISSAL: Lazy<Selector> = Lazy::new(|| Selector::parse("span > span").unwrap());
static RUNS: Lazy<Selector> = Lazy::new(|| Selector::parse("strong").unwrap());

/// Extras and total rows carry fewer cells than a batter's line.
const MIN_BATTING_CELLS: usize = 8;
const INNINGS_SUFFIX: &str = " Innings";

/// One batter's line in one innings of one match.
#[derive(Debug, Clone)]
pub struct BattingRecord {
    pub match_label: String,
    pub team_innings: String,
    /// 1-based rank in document order within the innings table; the page
    /// itself carries no position column.
    pub batting_position: usize,
    pub batsman_name: String,
    pub dismissal: String,
    pub runs: String,
    pub balls: String,
    pub fours: String,
    pub sixes: String,
    pub strike_rate: String,
}

impl CsvRecord for BattingRecord {
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "match" => Some(self.match_label.clone()),
            "teamInnings" => Some(self.team_innings.clone()),
            "battingPos" => Some(self.batting_position.to_string()),
            "batsmanName" => Some(self.batsman_name.clone()),
            "dismissal" => Some(self.dismissal.clone()),
            "runs" => Some(self.runs.clone()),
            "balls" => Some(self.balls.clone()),
            "4s" => Some(self.fours.clone()),
            "6s" => Some(self.sixes.clone()),
            "SR" => Some(self.strike_rate.clone()),
            _ => None,
        }
    }
}

/// Distinct team names from "<Name> Innings" headings, in order of first
/// occurrence.
fn team_names(document: &Html) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for span in document.select(&SPANS) {
        let text = collapse_ws(&span.text().collect::<String>());
        if let Some(name) = text.strip_suffix(INNINGS_SUFFIX) {
            if !name.is_empty() && !names.iter().any(|seen| seen == name) {
                names.push(name.to_string());
            }
        }
    }

    names
}

/// Batting lines for up to two innings tables on a scorecard page.
///
/// An empty result means the page did not match the expected shape; a batch
/// of pages is never failed over a single odd one.
pub fn extract_batting_summary(document: &Html) -> Vec<BattingRecord> {
    let names = team_names(document);
    let (team1, team2) = match names.as_slice() {
        [first, second, ..] => (first.clone(), second.clone()),
        _ => {
            warn!("Could not find two team innings headings, skipping page");
            return Vec::new();
        }
    };
    let match_label = format!("{team1} Vs {team2}");

    let mut records = Vec::new();

    // First table in document order is team1's innings, second is team2's.
    // An abandoned match may show only one table; the second is then skipped.
    let tables = document.select(&SCORECARD_TABLE).take(2);
    for (table, team) in tables.zip([&team1, &team2]) {
        for (index, row) in data_rows(table, MIN_BATTING_CELLS).iter().enumerate() {
            records.push(BattingRecord {
                match_label: match_label.clone(),
                team_innings: team.clone(),
                batting_position: index + 1,
                batsman_name: row.nested_text(0, &BATSMAN_NAME),
                dismissal: row.nested_text(1, &DISMISSAL),
                runs: row.nested_text(2, &RUNS),
                balls: row.text(3),
                // Column 4 is minutes batted, not part of the output.
                fours: row.text(5),
                sixes: row.text(6),
                strike_rate: row.text(7),
            });
        }
    }

    records
}
