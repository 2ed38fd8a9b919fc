mod loader;
mod validation;

pub use loader::{LoadReport, Loader};
pub use validation::{ValidationReport, ValidationRunner};
