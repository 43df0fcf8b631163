//! Line-driven ingestion of the quote-wrapped indicator export.
//!
//! The builder consumes the input as a lazy sequence of lines, exactly
//! once and in order. It starts in `AwaitingHeader`, skipping everything
//! until a line whose first field is `Country Name`, then ingests one
//! `Indicator` per subsequent line. Rows with too few fields are dropped
//! with a logged warning. A [`CancelToken`] is checked before each line,
//! so an external caller can abort a long read between lines; a tripped
//! token discards the partial report.

use crate::models::{Indicator, Report};
use crate::parse::{SEP, split_quoted_line};
use log::warn;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// First header field that marks the start of the data section.
const HEADER_MARKER: &str = "Country Name";

/// Number of leading non-year columns (country, code, name, code).
const META_COLUMNS: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    /// A header year column that does not parse as an integer. The whole
    /// ingest fails rather than mis-keying every row's values.
    #[error("header year label {0:?} is not a number")]
    InvalidYearLabel(String),
    #[error("read interrupted")]
    Interrupted,
    #[error("read stopped")]
    Stopped,
}

const INTERRUPTED: u8 = 1;
const STOPPED: u8 = 2;

/// Cooperative cancellation handle for an in-progress read.
///
/// Cloneable; trip it from wherever the external signal arrives and the
/// reader fails at its next between-lines check with the matching reason.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicU8>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the read with [`IngestError::Interrupted`].
    pub fn interrupt(&self) {
        self.0.store(INTERRUPTED, Ordering::Relaxed);
    }

    /// Abort the read with [`IngestError::Stopped`].
    pub fn stop(&self) {
        self.0.store(STOPPED, Ordering::Relaxed);
    }

    fn check(&self) -> Result<(), IngestError> {
        match self.0.load(Ordering::Relaxed) {
            INTERRUPTED => Err(IngestError::Interrupted),
            STOPPED => Err(IngestError::Stopped),
            _ => Ok(()),
        }
    }
}

/// Load a report from a file on disk, without cancellation.
pub fn load_report<P: AsRef<Path>>(path: P) -> Result<Report, IngestError> {
    let file = File::open(path)?;
    read_report(BufReader::new(file), &CancelToken::new())
}

/// Build a [`Report`] from any line-oriented reader.
///
/// Lines before the header are skipped silently; data rows shorter than
/// `years + 4` fields are dropped with a warning and ingestion continues.
pub fn read_report<R: BufRead>(reader: R, cancel: &CancelToken) -> Result<Report, IngestError> {
    let mut years: Vec<String> = Vec::new();
    let mut year_keys: Vec<i32> = Vec::new();
    let mut indicators: Vec<Indicator> = Vec::new();
    let mut ingesting = false;

    let mut lines = reader.lines();
    loop {
        cancel.check()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let fields = split_quoted_line(&line, SEP);

        if !ingesting {
            if fields.first().map(String::as_str) == Some(HEADER_MARKER) {
                years = fields[META_COLUMNS.min(fields.len())..].to_vec();
                year_keys = years
                    .iter()
                    .map(|y| {
                        y.parse::<i32>()
                            .map_err(|_| IngestError::InvalidYearLabel(y.clone()))
                    })
                    .collect::<Result<_, _>>()?;
                ingesting = true;
            }
            continue;
        }

        if fields.len() < years.len() + META_COLUMNS {
            warn!("ignored invalid line: {line:?}");
            continue;
        }

        let mut fields = fields.into_iter();
        let country = fields.next().unwrap_or_default();
        let country_code = fields.next().unwrap_or_default();
        let name = fields.next().unwrap_or_default();
        let code = fields.next().unwrap_or_default();
        let values: BTreeMap<i32, String> = year_keys.iter().copied().zip(fields).collect();

        indicators.push(Indicator {
            country,
            country_code,
            name,
            code,
            values,
        });
    }

    Ok(Report { years, indicators })
}
