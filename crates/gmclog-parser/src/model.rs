use serde::Serialize;

/// One accepted detector reading. `instant` is milliseconds since the
/// epoch, UTC; `cpm` is never negative and never the erroneous sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub instant: i64,
    pub cpm: u32,
}

/// One annotation row from the flags file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagEntry {
    pub instant: i64,
    pub text: String,
}

/// A chart point, serialized as a two-element `[instant_ms, value]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint<T>(pub i64, pub T);

/// A flag annotation positioned on the CPM series. `value` carries the CPM
/// reading at the same instant when one exists; unbound markers omit it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlagMarker {
    pub x: i64,
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
}

/// Terminal artifact handed to the charting collaborator: three ascending
/// time series plus the flag markers bound onto the CPM series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub cpm_series: Vec<SeriesPoint<u32>>,
    pub dose_usv_series: Vec<SeriesPoint<f64>>,
    pub dose_mr_series: Vec<SeriesPoint<f64>>,
    pub flags: Vec<FlagMarker>,
}
