use crate::config::ParserConfig;
use crate::errors::LogError;

/// Provenance and shape checks on the raw export text, short-circuiting on
/// the first failure. Each failure carries its own user-facing message.
pub fn validate(text: &str, config: &ParserConfig) -> Result<(), LogError> {
    if text.trim().is_empty() {
        return Err(LogError::Empty);
    }
    if !text.contains(config.signature.as_str()) {
        return Err(LogError::BadFormat);
    }
    if text.lines().count() < config.min_lines {
        return Err(LogError::TooShort);
    }
    Ok(())
}
