use crate::config::ParserConfig;
use crate::derive::derive_payload;
use crate::errors::LogError;
use crate::model::ChartPayload;
use crate::normalize::{normalize_flags, normalize_readings};
use crate::validate::validate;

/// Runs the full pipeline over one export: validation, normalization of
/// the data and (optional) flags texts, then series derivation.
pub fn parse_log(
    data_text: &str,
    flags_text: Option<&str>,
    config: &ParserConfig,
) -> Result<ChartPayload, LogError> {
    validate(data_text, config)?;
    let readings = normalize_readings(data_text, config)?;
    let flags = flags_text
        .map(|text| normalize_flags(text, config))
        .unwrap_or_default();
    Ok(derive_payload(&readings, &flags, config))
}
