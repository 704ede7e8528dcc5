use crate::config::ParserConfig;
use crate::model::{ChartPayload, FlagEntry, FlagMarker, Reading, SeriesPoint};

/// Rounds half-up to `places` decimal places.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Derives the two dose-rate series from the normalized CPM series and
/// binds flag annotations onto it. Flags match by exact instant only; a
/// flag with no matching reading keeps its marker but carries no value.
pub fn derive_payload(
    readings: &[Reading],
    flags: &[FlagEntry],
    config: &ParserConfig,
) -> ChartPayload {
    let mut cpm_series = Vec::with_capacity(readings.len());
    let mut dose_usv_series = Vec::with_capacity(readings.len());
    let mut dose_mr_series = Vec::with_capacity(readings.len());

    for reading in readings {
        let cpm = f64::from(reading.cpm);
        cpm_series.push(SeriesPoint(reading.instant, reading.cpm));
        dose_usv_series.push(SeriesPoint(
            reading.instant,
            round_to(cpm / config.usv_divisor, 2),
        ));
        dose_mr_series.push(SeriesPoint(
            reading.instant,
            round_to(cpm / config.mr_divisor, 3),
        ));
    }

    let flags = flags
        .iter()
        .map(|flag| {
            let value = readings
                .binary_search_by_key(&flag.instant, |reading| reading.instant)
                .ok()
                .map(|idx| readings[idx].cpm);
            FlagMarker {
                x: flag.instant,
                title: flag.text.clone(),
                text: flag.text.clone(),
                value,
            }
        })
        .collect();

    ChartPayload {
        cpm_series,
        dose_usv_series,
        dose_mr_series,
        flags,
    }
}
