pub mod dataset;
pub mod sample;

pub use dataset::{Dataset, RawDataset};
pub use sample::{month_name, RawSample, Sample};
