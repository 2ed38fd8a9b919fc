use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dataset columns, in the order they are written and inserted.
pub const FIELD_NAMES: [&str; 10] = [
    "transaction_id",
    "transaction_date",
    "venue",
    "event_name",
    "ticket_type",
    "quantity",
    "price",
    "revenue",
    "customer_id",
    "payment_method"
];

/// Stand-in for a payment method missing from the dataset.
pub const UNKNOWN_PAYMENT_METHOD: &str = "unknown";

/// A cleaned ticket sale, ready to be written to the dataset file or the warehouse.
///
/// Rows produced by the cleaner always satisfy `price >= 0`, `quantity >= 0` and
/// `|revenue - price * quantity| <= 0.01`. The descriptive columns may still be absent;
/// whether such a row is accepted is up to the warehouse table definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub transaction_id: Option<String>,
    #[serde(serialize_with = "crate::types::timestamp::serialize")]
    pub transaction_date: Option<NaiveDateTime>,
    pub venue: Option<String>,
    pub event_name: Option<String>,
    pub ticket_type: Option<String>,
    pub quantity: i32,
    pub price: Decimal,
    pub revenue: Decimal,
    pub customer_id: Option<String>,
    pub payment_method: String
}

/// A single row from the dataset file before any validation.
///
/// Every cell is kept as text so that malformed numbers survive until the cleaner
/// decides what to do with them. Empty cells and missing columns read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawTransaction {
    pub transaction_id: Option<String>,
    pub transaction_date: Option<String>,
    pub venue: Option<String>,
    pub event_name: Option<String>,
    pub ticket_type: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub revenue: Option<String>,
    pub customer_id: Option<String>,
    pub payment_method: Option<String>
}
