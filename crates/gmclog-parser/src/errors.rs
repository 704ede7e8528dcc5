use thiserror::Error;

/// Failures surfaced to the end user. The display strings are the exact
/// messages shown; callers present `err.to_string()` verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LogError {
    /// The uploaded text was empty or whitespace.
    #[error("Empty data.")]
    Empty,

    /// The device signature string was absent from the text.
    #[error("Bad file type or format.")]
    BadFormat,

    /// The text was too short to hold a header and one data row.
    #[error("Invalid CSV data.")]
    TooShort,

    /// The text passed the shape checks but no row survived filtering.
    #[error("No data.")]
    NoData,
}
