//! wdi-report
//!
//! A lightweight Rust library for loading World Bank indicator CSV exports
//! and answering two report questions over them. Pairs with the
//! `wdi-report` CLI.
//!
//! ### Features
//! - Parse the quote-wrapped export format (whole line in quotes, fields
//!   joined by `","`) into an in-memory [`Report`]
//! - Find the country with the highest summed indicator value over an
//!   inclusive year range
//! - Find the year with the highest cross-country average for an indicator
//! - Cooperative cancellation of long reads via [`CancelToken`]
//!
//! ### Example
//! ```no_run
//! use wdi_report::{ingest, query};
//!
//! let mut report = ingest::load_report("indicators.csv")?;
//! report.sort_indicators();
//! let country =
//!     query::highest_average_country(&report, "Urban population growth (annual %)", 1980, 1990)?;
//! let year = query::highest_average_year(&report, "CO2 emissions (kt)")?;
//! println!("{country} / {year}");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod ingest;
pub mod models;
pub mod parse;
pub mod query;

pub use ingest::{CancelToken, IngestError, load_report, read_report};
pub use models::{Indicator, Report};
pub use query::QueryError;
