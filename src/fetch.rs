//! Season-page fetching and table-row delivery
//!
//! The passing table lives inside `#div_passing`; each data cell carries a
//! stable `data-stat` attribute naming its column.

use scraper::{Html, Selector};

use crate::{Result, ScrapeError};

const BASE_URL: &str = "https://www.pro-football-reference.com";

/// One table cell: machine-readable column id plus rendered text.
#[derive(Debug, Clone)]
pub struct Cell {
    pub stat: String,
    pub text: String,
}

/// One table row as delivered by the page.
#[derive(Debug, Clone, Default)]
pub struct TableRow {
    pub cells: Vec<Cell>,
}

/// Source of season-page rows.
///
/// `emit` is invoked once per table row, in page order. Fetch or parse
/// failures are reported through the returned `Result` and are fatal to
/// the run.
pub trait PageFetcher: Send + Sync {
    fn stream_rows(&self, season: &str, emit: &mut dyn FnMut(TableRow)) -> Result<()>;
}

/// Fetches the per-season passing page over HTTP.
pub struct PassingPageFetcher {
    client: reqwest::blocking::Client,
}

impl Default for PassingPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PassingPageFetcher {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent("qb-scrape/0.1")
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        PassingPageFetcher { client }
    }

    fn season_url(season: &str) -> String {
        format!("{}/years/{}/passing.htm", BASE_URL, season)
    }
}

impl PageFetcher for PassingPageFetcher {
    fn stream_rows(&self, season: &str, emit: &mut dyn FnMut(TableRow)) -> Result<()> {
        let url = Self::season_url(season);
        log::debug!("Fetching {}", url);

        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(ScrapeError::Fetch {
                season: season.to_string(),
                message: format!("HTTP {}: {}", response.status(), url),
            });
        }

        let html = response.text()?;
        let rows = parse_rows(&html, emit);
        log::debug!("Season {}: {} table rows on page", season, rows);

        if rows == 0 {
            return Err(ScrapeError::Fetch {
                season: season.to_string(),
                message: format!("No passing table found at {}", url),
            });
        }
        Ok(())
    }
}

/// Walk the passing table in `html`, invoking `emit` once per row.
/// Returns the number of rows seen.
///
/// Only `td` cells are delivered; the leading `th` rank cell is not part
/// of a record. Split from fetching so tests can drive it with fixture
/// HTML.
pub fn parse_rows(html: &str, emit: &mut dyn FnMut(TableRow)) -> usize {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("#div_passing tbody tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let mut rows = 0;
    for row in document.select(&row_selector) {
        let cells = row
            .select(&cell_selector)
            .map(|td| Cell {
                stat: td.value().attr("data-stat").unwrap_or_default().to_string(),
                text: td.text().collect::<String>().trim().to_string(),
            })
            .collect();
        emit(TableRow { cells });
        rows += 1;
    }
    rows
}

#[cfg(test)]
pub(crate) mod testing {
    //! Canned collaborators for pipeline and driver tests.

    use super::*;

    pub(crate) struct FakeFetcher {
        pub rows: Vec<TableRow>,
        pub fail_season: Option<String>,
    }

    impl FakeFetcher {
        pub fn with_rows(rows: Vec<TableRow>) -> Self {
            FakeFetcher {
                rows,
                fail_season: None,
            }
        }
    }

    impl PageFetcher for FakeFetcher {
        fn stream_rows(&self, season: &str, emit: &mut dyn FnMut(TableRow)) -> Result<()> {
            if self.fail_season.as_deref() == Some(season) {
                return Err(ScrapeError::Fetch {
                    season: season.to_string(),
                    message: "page unavailable".to_string(),
                });
            }
            for row in &self.rows {
                emit(row.clone());
            }
            Ok(())
        }
    }

    /// A minimal data row: player, team, and the won-lost-tied record.
    pub(crate) fn data_row(player: &str, team: &str) -> TableRow {
        TableRow {
            cells: vec![
                Cell {
                    stat: "player".to_string(),
                    text: player.to_string(),
                },
                Cell {
                    stat: "team".to_string(),
                    text: team.to_string(),
                },
                Cell {
                    stat: "qb_rec".to_string(),
                    text: "11-4-0".to_string(),
                },
            ],
        }
    }
}
