use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wdi_report::{ingest, query};

const URBAN_GROWTH: &str = "Urban population growth (annual %)";
const CO2_KT: &str = "CO2 emissions (kt)";
const RANGE: (i32, i32) = (1980, 1990);

#[derive(Parser, Debug)]
#[command(
    name = "wdi-report",
    version,
    about = "Report range and cross-country averages from a World Bank indicator CSV export"
)]
struct Cli {
    /// Path to the indicator CSV export.
    file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut report = ingest::load_report(&cli.file)
        .with_context(|| format!("load {}", cli.file.display()))?;
    report.sort_indicators();

    let country = query::highest_average_country(&report, URBAN_GROWTH, RANGE.0, RANGE.1)?;
    println!(
        "The country with the highest average \"{URBAN_GROWTH}\" between {} and {} was {country}.",
        RANGE.0, RANGE.1
    );

    let year = query::highest_average_year(&report, CO2_KT)?;
    println!("The year with the highest average \"{CO2_KT}\" among all countries was {year}.");

    Ok(())
}
