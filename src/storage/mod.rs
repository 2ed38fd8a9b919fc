mod dataset;
mod errors;

pub use dataset::{read_dataset, write_dataset, Dataset};
pub use errors::DatasetError;
