pub mod classify;
pub mod numeric;
pub mod ranges;
pub mod summary;

pub use classify::{LabClassification, LabStatus, classify};
pub use numeric::{CellValue, parse_numeric};
pub use ranges::{REFERENCE_RANGES, ReferenceRange, reference_range};
pub use summary::{
    AbnormalEntry, AbnormalitySummary, LabRecord, abbreviate, summarize_abnormalities,
};
