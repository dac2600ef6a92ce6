//! Record types for the ingestion boundary and the normalized dataset.

pub mod raw;
pub mod record;

pub use raw::{RawRecord, RawValue};
pub use record::MovieRecord;
