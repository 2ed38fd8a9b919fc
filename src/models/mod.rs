mod transaction;

pub use transaction::{RawTransaction, Transaction, FIELD_NAMES, UNKNOWN_PAYMENT_METHOD};
