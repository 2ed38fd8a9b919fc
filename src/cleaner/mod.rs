mod data_cleaner;

pub use data_cleaner::{clean, CleanReport, DropReason, RevenueCorrection};
