use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

pub(crate) mod batting;
pub(crate) mod match_results;

static BODY_ROWS: Lazy<Selector> = Lazy::new(|| Selector::parse("tbody > tr").unwrap());
static CELLS: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// One retained table row, read cell-by-cell by position.
pub struct TableRow<'a> {
    cells: Vec<ElementRef<'a>>,
}

impl<'a> TableRow<'a> {
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Text content of the cell at `idx`; empty if the cell is absent.
    pub fn text(&self, idx: usize) -> String {
        self.cells
            .get(idx)
            .map(|cell| collapse_ws(&cell.text().collect::<String>()))
            .unwrap_or_default()
    }

    /// Text of the first descendant of cell `idx` matching `selector`.
    pub fn nested_text(&self, idx: usize, selector: &Selector) -> String {
        self.cells
            .get(idx)
            .and_then(|cell| cell.select(selector).next())
            .map(|el| collapse_ws(&el.text().collect::<String>()))
            .unwrap_or_default()
    }

    /// Href of the first anchor inside cell `idx`, if any.
    pub fn link(&self, idx: usize) -> Option<String> {
        self.cells
            .get(idx)?
            .select(&ANCHOR)
            .next()?
            .value()
            .attr("href")
            .map(str::to_string)
    }
}

/// Body rows of `table` with at least `min_cells` cells, in document order.
///
/// Scorecard and results tables interleave header, subtotal and extras rows
/// with data rows using the same markup; cell count is the only reliable
/// discriminator.
pub fn data_rows<'a>(table: ElementRef<'a>, min_cells: usize) -> Vec<TableRow<'a>> {
    table
        .select(&BODY_ROWS)
        .map(|row| TableRow {
            cells: row.select(&CELLS).collect(),
        })
        .filter(|row| row.cell_count() >= min_cells)
        .collect()
}

fn collapse_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
