//! Row-to-record conversion
//!
//! One extractor per season run: it owns the row position counter and the
//! accepted-record count, so no state survives between seasons.

use crate::fetch::TableRow;
use crate::playoffs::PlayoffTable;

/// Output column order, matching the source page's naming. `Yds` appears
/// twice: passing yards and yards lost to sacks, exactly as on the page.
pub const COLUMNS: [&str; 32] = [
    "Year", "Player", "Tm", "Age", "Pos", "G", "GS", "QBrec", "Cmp", "Att", "Cmp%", "Yds", "TD",
    "TD%", "Int", "Int%", "1D", "Lng", "Y/A", "AY/A", "Y/C", "Y/G", "Rate", "QBR", "Sk", "Yds",
    "NY/A", "ANY/A", "Sk%", "4QC", "GWD", "Playoffs",
];

/// 1-based position of the decorative header row the source page repeats
/// mid-table. Tied to the current page structure; must be revisited if the
/// layout changes.
pub const DECORATIVE_HEADER_ROW: usize = 30;

/// Column id of the won-lost-tied record ("11-4-0"). Its text embeds `-`
/// separators, so it is emitted pre-quoted to stay a single field.
pub const QB_RECORD_STAT: &str = "qb_rec";

/// Index of the team code in an assembled record (season, player, team).
const TEAM_COLUMN: usize = 2;

/// Converts table rows to records for one season run.
pub struct RowExtractor<'a> {
    season: &'a str,
    budget: usize,
    playoffs: &'a PlayoffTable,
    position: usize,
    accepted: usize,
}

impl<'a> RowExtractor<'a> {
    pub fn new(season: &'a str, budget: usize, playoffs: &'a PlayoffTable) -> Self {
        RowExtractor {
            season,
            budget,
            playoffs,
            position: 0,
            accepted: 0,
        }
    }

    /// True once the row budget is spent; every later row is a no-op skip.
    pub fn exhausted(&self) -> bool {
        self.accepted >= self.budget
    }

    /// Consume one row, returning the assembled record or `None` for a
    /// skip (decorative header row, or budget already spent).
    ///
    /// Cell counts are not validated: a malformed row passes through with
    /// whatever cells it has, and a row too short to carry a team code
    /// gets flag "N".
    pub fn extract(&mut self, row: &TableRow) -> Option<Vec<String>> {
        self.position += 1;
        if self.position == DECORATIVE_HEADER_ROW {
            return None;
        }
        if self.exhausted() {
            return None;
        }

        let mut record = Vec::with_capacity(COLUMNS.len());
        record.push(self.season.to_string());
        for cell in &row.cells {
            if cell.stat == QB_RECORD_STAT {
                record.push(format!("\"{}\"", cell.text));
            } else {
                record.push(cell.text.clone());
            }
        }

        let flag = match record.get(TEAM_COLUMN) {
            Some(team) => self.playoffs.flag(self.season, team),
            None => "N",
        };
        record.push(flag.to_string());

        self.accepted += 1;
        Some(record)
    }
}
