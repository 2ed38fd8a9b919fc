use crate::models::FIELD_NAMES;

pub const SCHEMA_VERSION: u32 = 1;
pub const TABLE_NAME: &str = "sphere_revenue";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Timestamp,
    Integer,
    Numeric
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind
}

impl Column {
    const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Self { name, kind }
    }

    /// Positional placeholder for this column. Timestamps are bound as text and cast by the warehouse.
    pub fn placeholder(&self, position: usize) -> String {
        match self.kind {
            ColumnKind::Timestamp => format!("${position}::TEXT::TIMESTAMP"),
            _ => format!("${position}")
        }
    }
}

/// Fixed mapping between [`Transaction`](crate::models::Transaction) fields and the
/// warehouse table, in binding order.
pub const COLUMNS: [Column; 10] = [
    Column::new("transaction_id", ColumnKind::Text),
    Column::new("transaction_date", ColumnKind::Timestamp),
    Column::new("venue", ColumnKind::Text),
    Column::new("event_name", ColumnKind::Text),
    Column::new("ticket_type", ColumnKind::Text),
    Column::new("quantity", ColumnKind::Integer),
    Column::new("price", ColumnKind::Numeric),
    Column::new("revenue", ColumnKind::Numeric),
    Column::new("customer_id", ColumnKind::Text),
    Column::new("payment_method", ColumnKind::Text)
];

/// Builds the single-row insert statement for [`TABLE_NAME`].
pub fn insert_statement() -> String {
    let names: Vec<&str> = COLUMNS.iter().map(|column| column.name).collect();
    let placeholders: Vec<String> = COLUMNS.iter()
        .enumerate()
        .map(|(index, column)| column.placeholder(index + 1))
        .collect();

    format!("INSERT INTO {TABLE_NAME} ({}) VALUES ({})", names.join(", "), placeholders.join(", "))
}

//NOTE: Column names never come from the dataset file; its header is only checked against the mapping
pub fn is_known_column(name: &str) -> bool {
    FIELD_NAMES.contains(&name)
}
