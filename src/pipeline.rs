//! Per-season extraction pipeline
//!
//! The fetch runs on its own thread and hands rows back over a channel.
//! The caller blocks until the row budget is spent or the page's row
//! stream ends, whichever comes first, then observes the fetch outcome.

use std::sync::mpsc;
use std::thread;

use crate::extract::RowExtractor;
use crate::fetch::{PageFetcher, TableRow};
use crate::playoffs::PlayoffTable;
use crate::sink::RecordSink;
use crate::Result;

pub struct SeasonPipeline<'a> {
    fetcher: &'a dyn PageFetcher,
    playoffs: &'a PlayoffTable,
}

impl<'a> SeasonPipeline<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher, playoffs: &'a PlayoffTable) -> Self {
        SeasonPipeline { fetcher, playoffs }
    }

    /// Extract one season, writing accepted records to `sink` in source
    /// order. Returns the number of records written.
    ///
    /// The channel is the per-season completion signal: receiving stops
    /// once the budget is spent or the sender side closes at end of
    /// stream. Rows delivered after the budget is spent are received and
    /// discarded, never written; the fetch itself is not cancelled, and
    /// its result is observed before returning.
    pub fn run(&self, season: &str, budget: usize, sink: &mut dyn RecordSink) -> Result<usize> {
        let (tx, rx) = mpsc::channel::<TableRow>();

        thread::scope(|scope| {
            let fetch = scope.spawn(move || {
                self.fetcher.stream_rows(season, &mut |row| {
                    // Send failures mean the receiver hung up after
                    // spending the budget; remaining rows are dropped.
                    let _ = tx.send(row);
                })
            });

            let mut extractor = RowExtractor::new(season, budget, self.playoffs);
            let mut written = 0usize;

            for row in &rx {
                if let Some(record) = extractor.extract(&row) {
                    sink.write_row(&record)?;
                    written += 1;
                }
                if extractor.exhausted() {
                    break;
                }
            }
            drop(rx);

            match fetch.join() {
                Ok(result) => result?,
                Err(panic) => std::panic::resume_unwind(panic),
            }

            log::info!("Season {}: {} records", season, written);
            Ok(written)
        })
    }
}
