use std::path::Path;

use chrono::{NaiveDateTime, SubsecRound, TimeDelta};
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Builder;

use crate::events::{Event, Observer};
use crate::models::Transaction;
use crate::storage::{write_dataset, DatasetError};

pub const DEFAULT_RECORD_COUNT: usize = 10_000;

pub const VENUES: [&str; 2] = ["Sphere Las Vegas", "MSG Network"];
pub const EVENT_NAMES: [&str; 5] = ["U2 Concert", "Knicks Game", "Rangers Game", "Movie Night", "Comedy Show"];
pub const TICKET_TYPES: [&str; 5] = ["General Admission", "VIP", "Premium", "Child", "Student"];
pub const PAYMENT_METHODS: [&str; 4] = ["Credit Card", "Debit Card", "Cash", "Gift Card"];

const MIN_QUANTITY: i32 = 1;
const MAX_QUANTITY: i32 = 5;
const MIN_PRICE_CENTS: i64 = 2_000;
const MAX_PRICE_CENTS: i64 = 20_000;
const SECONDS_PER_YEAR: i64 = 365 * 24 * 60 * 60;

/// Synthesizes `count` ticket sales dated within the year before `now`.
///
/// Identifiers are UUID v4 values drawn from `rng`, so a seeded generator always
/// produces the same dataset for the same `now`.
pub fn generate<R: Rng, O: Observer + ?Sized>(count: usize, now: NaiveDateTime, rng: &mut R, observer: &O) -> Vec<Transaction> {
    observer.notify(&Event::GenerationStarted { records: count });

    let now = now.trunc_subsecs(0);
    let records: Vec<Transaction> = (0..count).map(|_| generate_record(now, rng)).collect();

    observer.notify(&Event::GenerationFinished { records: records.len() });

    records
}

/// Writes generated records to the dataset file at `path`.
pub fn save<O: Observer + ?Sized>(path: &Path, records: &[Transaction], observer: &O) -> Result<(), DatasetError> {
    write_dataset(path, records)?;

    observer.notify(&Event::DatasetSaved { path: path.to_path_buf(), records: records.len() });

    Ok(())
}

fn generate_record<R: Rng>(now: NaiveDateTime, rng: &mut R) -> Transaction {
    let quantity = rng.gen_range(MIN_QUANTITY..=MAX_QUANTITY);
    let price = Decimal::new(rng.gen_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS), 2);
    let age = TimeDelta::seconds(rng.gen_range(0..=SECONDS_PER_YEAR));

    Transaction {
        transaction_id: Some(random_uuid(rng)),
        transaction_date: Some(now - age),
        venue: Some(pick(rng, &VENUES)),
        event_name: Some(pick(rng, &EVENT_NAMES)),
        ticket_type: Some(pick(rng, &TICKET_TYPES)),
        quantity,
        price,
        revenue: price * Decimal::from(quantity),
        customer_id: Some(random_uuid(rng)),
        payment_method: pick(rng, &PAYMENT_METHODS)
    }
}

fn pick<R: Rng>(rng: &mut R, values: &[&str]) -> String {
    values[rng.gen_range(0..values.len())].to_string()
}

fn random_uuid<R: Rng>(rng: &mut R) -> String {
    Builder::from_random_bytes(rng.r#gen()).into_uuid().to_string()
}
