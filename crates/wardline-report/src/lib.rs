pub mod round_summary;
pub mod timestamp;

pub use round_summary::{RoundBundle, ScoreRecord, build_round_summary};
pub use timestamp::{PLACEHOLDER, format_timestamp};
