//! The two canned aggregations over a loaded [`Report`]. Both are pure
//! reads; both match the indicator name exactly and case-sensitively.

use crate::models::{Indicator, Report};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("no data for indicator {0:?}")]
    NoMatchingIndicator(String),
    /// Rows matched the indicator but every year's cell was empty.
    #[error("no observations for indicator {0:?}")]
    NoObservations(String),
}

/// Sum an indicator's cells over `start..=end`, or `None` if any year in
/// the range is missing or empty. A partially-present range disqualifies
/// the whole candidate; no partial sum leaks into the comparison.
fn range_sum(ind: &Indicator, start: i32, end: i32) -> Option<f64> {
    let mut sum = 0.0;
    for year in start..=end {
        match ind.values.get(&year) {
            None => return None,
            Some(v) if v.is_empty() => return None,
            // Non-numeric cells fold in as NaN, which loses every
            // comparison; matches the lenient float parse of the source
            // format.
            Some(v) => sum += v.parse::<f64>().unwrap_or(f64::NAN),
        }
    }
    Some(sum)
}

/// Country with the highest summed value for `indicator_name` over the
/// inclusive year range. Candidates are reduced left to right in report
/// order; a new candidate with a complete range beats the incumbent on
/// ties (`>=`), and an incumbent with a hole in its range loses to any
/// complete newcomer.
pub fn highest_average_country<'a>(
    report: &'a Report,
    indicator_name: &str,
    start_year: i32,
    end_year: i32,
) -> Result<&'a str, QueryError> {
    let mut winner: Option<&Indicator> = None;
    for candidate in report
        .indicators
        .iter()
        .filter(|i| i.name == indicator_name)
    {
        let Some(incumbent) = winner else {
            winner = Some(candidate);
            continue;
        };
        // Disqualification order matters: the candidate is checked first,
        // then the incumbent.
        let Some(candidate_sum) = range_sum(candidate, start_year, end_year) else {
            continue;
        };
        let Some(incumbent_sum) = range_sum(incumbent, start_year, end_year) else {
            winner = Some(candidate);
            continue;
        };
        if candidate_sum >= incumbent_sum {
            winner = Some(candidate);
        }
    }
    winner
        .map(|i| i.country.as_str())
        .ok_or_else(|| QueryError::NoMatchingIndicator(indicator_name.to_string()))
}

/// Year with the highest average value for `indicator_name` across all
/// matching rows. Empty cells contribute to neither total nor count for
/// their year; a later year beats an earlier one on ties (`>=`). Years
/// where every row was empty are not candidates.
pub fn highest_average_year(report: &Report, indicator_name: &str) -> Result<i32, QueryError> {
    let matching: Vec<&Indicator> = report
        .indicators
        .iter()
        .filter(|i| i.name == indicator_name)
        .collect();
    if matching.is_empty() {
        return Err(QueryError::NoMatchingIndicator(indicator_name.to_string()));
    }

    let mut best: Option<(i32, f64)> = None;
    // Accumulate per year in header order so tie-breaking follows the
    // column order of the input.
    for year in report.years.iter().filter_map(|y| y.parse::<i32>().ok()) {
        let mut total = 0.0;
        let mut count = 0u32;
        for ind in &matching {
            match ind.values.get(&year) {
                Some(v) if !v.is_empty() => {
                    total += v.parse::<f64>().unwrap_or(f64::NAN);
                    count += 1;
                }
                _ => {}
            }
        }
        if count == 0 {
            continue;
        }
        let avg = total / f64::from(count);
        match best {
            None => best = Some((year, avg)),
            Some((_, best_avg)) if avg >= best_avg => best = Some((year, avg)),
            _ => {}
        }
    }

    best.map(|(year, _)| year)
        .ok_or_else(|| QueryError::NoObservations(indicator_name.to_string()))
}
