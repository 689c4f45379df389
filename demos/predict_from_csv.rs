use chrono::NaiveDate;
use meteopred::{ClimatePredictor, CsvSource, LatLon, DEFAULT_INTERPOLATION_LIMIT};
use std::env;

/// Usage: predict_from_csv <station.csv> [YYYY-MM-DD]
///
/// The CSV is a decompressed Meteostat bulk daily file. Gaps of up to 100 days are
/// filled by linear interpolation.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let path = args.next().ok_or("missing path to a daily CSV file")?;
    let date = match args.next() {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")?,
        None => NaiveDate::from_ymd_opt(2023, 6, 18).ok_or("invalid default date")?,
    };

    let source = CsvSource::new(path).interpolate(DEFAULT_INTERPOLATION_LIMIT);
    let novosibirsk = LatLon(55.00835, 82.93573);
    let predictor = ClimatePredictor::from_source(&source)
        .location(novosibirsk)
        .call()?;

    println!(
        "{}",
        serde_json::to_string_pretty(&predictor.predict_temperature(date)?)?
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&predictor.predict_precipitation(date)?)?
    );
    Ok(())
}
