use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::events::{Event, Observer};
use crate::models::{RawTransaction, Transaction, UNKNOWN_PAYMENT_METHOD};
use crate::types::{parse_amount, parse_quantity, revenue_tolerance, timestamp};

/// Why a row was removed from the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DropReason {
    InvalidPrice,
    InvalidQuantity,
    RevenueOverflow
}

impl Display for DropReason {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DropReason::InvalidPrice => write!(formatter, "invalid prices"),
            DropReason::InvalidQuantity => write!(formatter, "invalid quantities"),
            DropReason::RevenueOverflow => write!(formatter, "revenue overflow")
        }
    }
}

/// A revenue value that disagreed with `price * quantity` and was overwritten.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueCorrection {
    pub transaction_id: Option<String>,
    pub recorded: Option<Decimal>,
    pub calculated: Decimal
}

/// Tally of what the cleaner did to a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub input_rows: usize,
    pub filled_payment_methods: usize,
    pub corrected_revenues: usize,
    pub dropped: BTreeMap<DropReason, usize>
}

impl CleanReport {
    pub fn dropped_total(&self) -> usize {
        self.dropped.values().sum()
    }

    pub fn kept(&self) -> usize {
        self.input_rows - self.dropped_total()
    }
}

/// Output of [`clean`]: the rows fit for the warehouse and a summary of the repairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Cleaned {
    pub rows: Vec<Transaction>,
    pub report: CleanReport
}

/// A raw row with its numeric cells coerced. Unparseable cells become `None`.
struct Coerced {
    raw: RawTransaction,
    price: Option<Decimal>,
    quantity: Option<i32>,
    revenue: Option<Decimal>
}

impl Coerced {
    fn new(raw: RawTransaction) -> Self {
        let price = raw.price.as_deref().and_then(|value| parse_amount(value).ok());
        let quantity = raw.quantity.as_deref().and_then(|value| parse_quantity(value).ok());
        let revenue = raw.revenue.as_deref().and_then(|value| parse_amount(value).ok());

        Self { raw, price, quantity, revenue }
    }
}

/// A row that passed the price and quantity checks.
struct Priced {
    raw: RawTransaction,
    price: Decimal,
    quantity: i32,
    revenue: Option<Decimal>
}

impl Priced {
    fn into_transaction(self, revenue: Decimal) -> Transaction {
        let RawTransaction { transaction_id, transaction_date, venue, event_name, ticket_type, customer_id, payment_method, .. } = self.raw;

        Transaction {
            transaction_id: text(transaction_id),
            transaction_date: text(transaction_date).and_then(|value| timestamp::parse(&value).ok()),
            venue: text(venue),
            event_name: text(event_name),
            ticket_type: text(ticket_type),
            quantity: self.quantity,
            price: self.price,
            revenue,
            customer_id: text(customer_id),
            payment_method: text(payment_method).unwrap_or_else(|| UNKNOWN_PAYMENT_METHOD.to_string())
        }
    }
}

fn text(value: Option<String>) -> Option<String> {
    value.map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|value| value.trim().is_empty())
}

/// Repairs or removes invalid rows so that every returned row satisfies the revenue invariant.
///
/// The steps run in a fixed order:
/// 1. a missing `payment_method` becomes `"unknown"`;
/// 2. `price`, `quantity`, `revenue` and `transaction_date` are coerced, unparseable cells become absent;
/// 3. rows with an absent or negative `price` are dropped;
/// 4. rows with an absent or negative `quantity` are dropped;
/// 5. `revenue` is overwritten with `price * quantity` wherever it is absent or off by more
///    than 0.01 (the row is kept). Rows whose product overflows are dropped.
///
/// Missing descriptive fields are passed through; the warehouse decides whether it
/// accepts such a row. Every drop and correction is reported to `observer` as a single
/// warning event. The function keeps no state between calls and `clean(clean(x)) == clean(x)`.
pub fn clean<O: Observer + ?Sized>(rows: Vec<RawTransaction>, observer: &O) -> Cleaned {
    let mut report = CleanReport { input_rows: rows.len(), ..CleanReport::default() };

    observer.notify(&Event::CleaningStarted { rows: rows.len() });

    let rows: Vec<Coerced> = rows.into_iter()
        .map(|mut row| {
            if is_blank(&row.payment_method) {
                row.payment_method = Some(UNKNOWN_PAYMENT_METHOD.to_string());
                report.filled_payment_methods += 1;
            }

            Coerced::new(row)
        })
        .collect();

    if report.filled_payment_methods > 0 {
        observer.notify(&Event::PaymentMethodsFilled { rows: report.filled_payment_methods });
    }

    let rows = drop_rows(rows, DropReason::InvalidPrice, &mut report, observer, |row| {
        row.price.is_some_and(|price| price >= Decimal::ZERO)
    });

    let rows = drop_rows(rows, DropReason::InvalidQuantity, &mut report, observer, |row| {
        row.quantity.is_some_and(|quantity| quantity >= 0)
    });

    //NOTE: Both checks above guarantee a value, the filter only satisfies the type
    let rows: Vec<Priced> = rows.into_iter()
        .filter_map(|row| Some(Priced { price: row.price?, quantity: row.quantity?, revenue: row.revenue, raw: row.raw }))
        .collect();

    let cleaned = reconcile_revenue(rows, &mut report, observer);

    observer.notify(&Event::CleaningFinished { report: report.clone() });

    Cleaned { rows: cleaned, report }
}

fn drop_rows<O, F>(rows: Vec<Coerced>, reason: DropReason, report: &mut CleanReport, observer: &O, is_valid: F) -> Vec<Coerced>
where
    O: Observer + ?Sized,
    F: Fn(&Coerced) -> bool,
{
    let (kept, dropped): (Vec<_>, Vec<_>) = rows.into_iter().partition(|row| is_valid(row));

    if !dropped.is_empty() {
        *report.dropped.entry(reason).or_default() += dropped.len();
        observer.notify(&Event::RowsDropped {
            reason,
            rows: dropped.into_iter().map(|row| row.raw).collect()
        });
    }

    kept
}

fn reconcile_revenue<O: Observer + ?Sized>(rows: Vec<Priced>, report: &mut CleanReport, observer: &O) -> Vec<Transaction> {
    let tolerance = revenue_tolerance();
    let mut cleaned = Vec::with_capacity(rows.len());
    let mut overflowed = Vec::new();
    let mut corrections = Vec::new();

    for row in rows {
        let Some(calculated) = row.price.checked_mul(Decimal::from(row.quantity)) else {
            overflowed.push(row.raw);
            continue;
        };

        let revenue = match row.revenue {
            Some(recorded) if recorded.checked_sub(calculated).is_some_and(|difference| difference.abs() <= tolerance) => recorded,
            recorded => {
                corrections.push(RevenueCorrection {
                    transaction_id: row.raw.transaction_id.clone(),
                    recorded,
                    calculated
                });

                calculated
            }
        };

        cleaned.push(row.into_transaction(revenue));
    }

    if !overflowed.is_empty() {
        *report.dropped.entry(DropReason::RevenueOverflow).or_default() += overflowed.len();
        observer.notify(&Event::RowsDropped { reason: DropReason::RevenueOverflow, rows: overflowed });
    }

    if !corrections.is_empty() {
        report.corrected_revenues += corrections.len();
        observer.notify(&Event::RevenueCorrected { corrections });
    }

    cleaned
}
