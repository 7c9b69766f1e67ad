//! Whole-run orchestration

use crate::extract::COLUMNS;
use crate::fetch::PageFetcher;
use crate::pipeline::SeasonPipeline;
use crate::playoffs::PlayoffTable;
use crate::sink::RecordSink;
use crate::{Config, Result};

/// Run the extraction over every configured season against `sink`.
///
/// Writes the column header once, then each season's records in the
/// configured order with the same row budget. Seasons never overlap: all
/// of one season's records are written before the next fetch begins. Any
/// failure aborts the run with whatever was already flushed.
///
/// Returns the total number of records written.
pub fn run(config: &Config, fetcher: &dyn PageFetcher, sink: &mut dyn RecordSink) -> Result<usize> {
    config.validate()?;

    sink.write_header(&COLUMNS)?;

    let playoffs = PlayoffTable::new();
    let pipeline = SeasonPipeline::new(fetcher, &playoffs);

    let mut total = 0;
    for season in &config.scrape.seasons {
        log::info!("Extracting season {}...", season);
        total += pipeline.run(season, config.scrape.row_budget, sink)?;
    }

    sink.flush()?;
    Ok(total)
}
