use std::collections::BTreeMap;

use crate::classify::classify_cpm;
use crate::config::ParserConfig;
use crate::errors::LogError;
use crate::model::{FlagEntry, Reading};
use crate::timestamp::parse_instant;

/// Strips whitespace and stray boundary separators from one raw line.
fn clean_line(raw: &str) -> Option<&str> {
    let line = raw.trim().trim_matches(',');
    (!line.is_empty()).then_some(line)
}

/// Normalizes raw export text into an ascending, deduplicated reading
/// series. Individual malformed rows are skipped; only a total absence of
/// valid rows is an error.
///
/// A later row with the same timestamp overwrites an earlier one.
pub fn normalize_readings(
    text: &str,
    config: &ParserConfig,
) -> Result<Vec<Reading>, LogError> {
    let mut readings: BTreeMap<i64, u32> = BTreeMap::new();

    for raw in text.lines() {
        let Some(line) = clean_line(raw) else { continue };

        let mut fields = line.split(',');
        let (Some(date), Some(field1), Some(field2)) =
            (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };

        let Some(instant) = parse_instant(date, config.date_mode) else {
            continue;
        };

        let cpm = classify_cpm(field1, field2);
        if cpm < 0 || cpm == config.erroneous_cpm {
            continue;
        }
        let Ok(cpm) = u32::try_from(cpm) else { continue };

        readings.insert(instant, cpm);
    }

    if readings.is_empty() {
        return Err(LogError::NoData);
    }

    Ok(readings
        .into_iter()
        .map(|(instant, cpm)| Reading { instant, cpm })
        .collect())
}

/// Parses the optional annotation file into an ascending flag list. Never
/// fails: rows without a parseable date and non-empty text are skipped, and
/// empty input yields an empty list.
///
/// The free-text remainder is not split further, so it keeps any embedded
/// separators.
pub fn normalize_flags(text: &str, config: &ParserConfig) -> Vec<FlagEntry> {
    let mut flags: BTreeMap<i64, String> = BTreeMap::new();

    for raw in text.lines() {
        let Some(line) = clean_line(raw) else { continue };

        let Some((date, remainder)) = line.split_once(',') else {
            continue;
        };

        let Some(instant) = parse_instant(date, config.date_mode) else {
            continue;
        };

        let label = remainder.trim();
        if label.is_empty() {
            continue;
        }

        flags.insert(instant, label.to_string());
    }

    flags
        .into_iter()
        .map(|(instant, text)| FlagEntry { instant, text })
        .collect()
}
