pub mod dataset;
pub mod record;

pub use dataset::Dataset;
pub use record::{Record, UNKNOWN};
