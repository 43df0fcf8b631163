use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One data row from the export: a single country/indicator time series.
///
/// `values` maps each header year to the raw cell string. An empty string
/// means "no data" and is kept as-is so queries can decide how to treat it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Indicator {
    /// Display name of the country or region (e.g., "Germany").
    pub country: String,
    /// Short country/region code (e.g., "DEU").
    pub country_code: String,
    /// Human-readable indicator name. Not unique: every country carrying
    /// the same indicator repeats it.
    pub name: String,
    /// Machine-readable indicator id (e.g., "EN.ATM.CO2E.KT").
    pub code: String,
    /// Year → raw cell value, keyed by the parsed header years.
    pub values: BTreeMap<i32, String>,
}

/// Whole loaded dataset: the header's year labels plus one `Indicator`
/// per data row, in input order. Duplicate rows are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Report {
    /// Year labels from header column 4 onward, in header order. Each
    /// label parses as `i32`; the parsed values key every `Indicator.values`.
    pub years: Vec<String>,
    pub indicators: Vec<Indicator>,
}

impl Report {
    /// Sort rows in place by country name, then indicator code.
    ///
    /// The model is read-only after ingestion apart from this one sort,
    /// which callers run before querying.
    pub fn sort_indicators(&mut self) {
        self.indicators
            .sort_by(|a, b| a.country.cmp(&b.country).then_with(|| a.code.cmp(&b.code)));
    }
}
