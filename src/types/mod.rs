mod errors;
mod monetary;
#[cfg(test)]
mod tests;
pub mod timestamp;

pub use monetary::{parse_amount, parse_quantity, revenue_tolerance};
