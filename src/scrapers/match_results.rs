use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::warn;

use super::{data_rows, TableRow};
use crate::clients::cricinfo;
use crate::export::CsvRecord;

static RESULTS_TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table.ds-w-full").unwrap());

/// Header and spacer rows on the results index carry fewer cells than this.
const MIN_SUMMARY_CELLS: usize = 7;

/// One completed match on the tournament results index.
#[derive(Debug, Clone)]
pub struct MatchSummary {
    pub team1: String,
    pub team2: String,
    pub winner: String,
    pub margin: String,
    pub ground: String,
    pub match_date: String,
    pub scorecard: String,
    /// Relative link to the match's scorecard page, when the cell carries one.
    pub scorecard_href: Option<String>,
}

impl MatchSummary {
    fn from_row(row: &TableRow) -> Self {
        Self {
            team1: row.text(0),
            team2: row.text(1),
            winner: row.text(2),
            margin: row.text(3),
            ground: row.text(4),
            match_date: row.text(5),
            scorecard: row.text(6),
            scorecard_href: row.link(6),
        }
    }
}

impl CsvRecord for MatchSummary {
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "team1" => Some(self.team1.clone()),
            "team2" => Some(self.team2.clone()),
            "winner" => Some(self.winner.clone()),
            "margin" => Some(self.margin.clone()),
            "ground" => Some(self.ground.clone()),
            "matchDate" => Some(self.match_date.clone()),
            "scorecard" => Some(self.scorecard.clone()),
            _ => None,
        }
    }
}

/// One summary per results-table row with at least seven cells.
///
/// Columns are read by position, not header text; the site gives no stable
/// column identifiers.
pub fn extract_match_summaries(document: &Html) -> Vec<MatchSummary> {
    document
        .select(&RESULTS_TABLE)
        .flat_map(|table| data_rows(table, MIN_SUMMARY_CELLS))
        .map(|row| MatchSummary::from_row(&row))
        .collect()
}

/// Absolute scorecard URLs for the summaries that carry a link.
///
/// Rows without one stay in the summary output but never drive the
/// per-match stage.
pub fn match_links(summaries: &[MatchSummary]) -> Vec<String> {
    let mut links = Vec::new();

    for (index, summary) in summaries.iter().enumerate() {
        match &summary.scorecard_href {
            Some(href) => links.push(cricinfo::resolve(href)),
            None => warn!("No scorecard link found at row {index}"),
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::GAME_SUMMARY_SCHEMA;

    const INDEX_PAGE: &str = r#"<html><body>
        <table class="ds-w-full ds-table">
          <tbody>
            <tr><td>Team 1</td><td>Team 2</td><td>Winner</td></tr>
            <tr>
              <td>Australia</td><td>India</td><td>Australia</td><td>125 runs</td>
              <td>Johannesburg</td><td>Mar 23, 2003</td>
              <td><a href="/series/8039/scorecard/65285">ODI # 1956</a></td>
            </tr>
            <tr>
              <td>Kenya</td><td>Zimbabwe</td><td>no result</td><td>-</td>
              <td>Nairobi</td><td>Feb 15, 2003</td>
              <td>ODI # 1940</td>
            </tr>
          </tbody>
        </table>
    </body></html>"#;

    #[test]
    fn header_rows_are_dropped_and_columns_read_by_position() {
        let document = Html::parse_document(INDEX_PAGE);

        let summaries = extract_match_summaries(&document);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].team1, "Australia");
        assert_eq!(summaries[0].team2, "India");
        assert_eq!(summaries[0].winner, "Australia");
        assert_eq!(summaries[0].margin, "125 runs");
        assert_eq!(summaries[0].ground, "Johannesburg");
        assert_eq!(summaries[0].match_date, "Mar 23, 2003");
        assert_eq!(summaries[0].scorecard, "ODI # 1956");
    }

    #[test]
    fn only_rows_with_a_link_become_match_links() {
        let document = Html::parse_document(INDEX_PAGE);
        let summaries = extract_match_summaries(&document);

        let links = match_links(&summaries);

        assert_eq!(
            links,
            ["https://www.espncricinfo.com/series/8039/scorecard/65285"]
        );
        // The linkless row is still part of the summary output.
        assert_eq!(summaries[1].scorecard, "ODI # 1940");
        assert_eq!(summaries[1].scorecard_href, None);
    }

    #[test]
    fn page_without_results_table_yields_no_summaries() {
        let document = Html::parse_document("<html><body><p>gone</p></body></html>");

        assert!(extract_match_summaries(&document).is_empty());
    }

    #[test]
    fn summary_covers_every_schema_key() {
        let document = Html::parse_document(INDEX_PAGE);
        let summaries = extract_match_summaries(&document);

        for (key, _) in GAME_SUMMARY_SCHEMA {
            assert!(summaries[0].field(key).is_some(), "missing key {key}");
        }
        assert_eq!(summaries[0].field("unknown"), None);
    }
}
