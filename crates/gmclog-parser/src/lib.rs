pub mod config;
pub mod errors;
pub mod model;

mod classify;
mod derive;
mod normalize;
mod pipeline;
mod timestamp;
mod validate;

pub use classify::classify_cpm;
pub use config::{DateMode, ParserConfig};
pub use derive::derive_payload;
pub use errors::LogError;
pub use model::{ChartPayload, FlagEntry, FlagMarker, Reading, SeriesPoint};
pub use normalize::{normalize_flags, normalize_readings};
pub use pipeline::parse_log;
pub use timestamp::parse_instant;
pub use validate::validate;
