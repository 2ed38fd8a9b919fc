#[cfg(test)]
mod tests;
mod record_generator;

pub use record_generator::{generate, save, DEFAULT_RECORD_COUNT};
