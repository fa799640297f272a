pub mod record;
pub mod schema;
pub mod symptoms;

pub use record::{ImportRow, PatientRecord};
pub use schema::{
    CURRENT_COLUMNS, CURRENT_DIAGNOSIS, CURRENT_SECTION, ImportMode, LEGACY_CAUSE_OF_ADMISSION,
    LEGACY_COLUMNS,
};
pub use symptoms::{
    CTCAE_ITEMS, CTCAE_MAX_SCORE, ESAS_ITEMS, ESAS_MAX_SCORE, as_bool, normalize_score,
};
