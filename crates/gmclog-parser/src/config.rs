/// Signature string the device embeds in every valid export.
pub const SIGNATURE: &str = "GQ Geiger Muller Counter Data Logger";

/// CPM reading the device writes on malfunction/overflow.
pub const ERRONEOUS_CPM: i64 = 15300;

/// Divisor for the CPM -> microsievert-per-hour series.
pub const CPM_TO_USV: f64 = 175.43;

/// Divisor for the CPM -> milliroentgen-per-hour series.
pub const CPM_TO_MR: f64 = 1754.3;

/// A valid export holds at least the signature line and one data row.
pub const MIN_LINES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateMode {
    /// Device-native export format only: `YYYY-MM-DD HH:MM`, UTC.
    Strict,
    /// Additionally accept second precision, slash separators and RFC 3339.
    #[default]
    Lenient,
}

/// Knobs for one pipeline invocation. Defaults match the GMC-300 export
/// format; tests substitute synthetic values.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub signature: String,
    pub erroneous_cpm: i64,
    pub min_lines: usize,
    pub usv_divisor: f64,
    pub mr_divisor: f64,
    pub date_mode: DateMode,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            signature: SIGNATURE.to_string(),
            erroneous_cpm: ERRONEOUS_CPM,
            min_lines: MIN_LINES,
            usv_divisor: CPM_TO_USV,
            mr_divisor: CPM_TO_MR,
            date_mode: DateMode::default(),
        }
    }
}
