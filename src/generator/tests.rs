use super::record_generator::{EVENT_NAMES, PAYMENT_METHODS, TICKET_TYPES, VENUES};
use super::{generate, save};

use std::collections::HashSet;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use tempfile::tempdir;
use uuid::Uuid;

use crate::cleaner::clean;
use crate::events::{Event, RecordingObserver};
use crate::storage::read_dataset;

fn fixed_now() -> Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2025, 7, 4)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .ok_or_else(|| anyhow!("invalid test date"))
}

fn field(value: &Option<String>) -> Result<&str> {
    value.as_deref().ok_or_else(|| anyhow!("generated record is missing a field"))
}

#[test]
fn test_generated_records_stay_within_business_ranges() -> Result<()> {
    let observer = RecordingObserver::default();
    let now = fixed_now()?;
    let records = generate(2_000, now, &mut StdRng::seed_from_u64(7), &observer);

    let min_price = Decimal::from_str("20.00")?;
    let max_price = Decimal::from_str("200.00")?;

    assert_eq!(records.len(), 2_000);

    for record in &records {
        assert!((1..=5).contains(&record.quantity));
        assert!(record.price >= min_price && record.price <= max_price);
        assert!(record.price.scale() <= 2);
        assert_eq!(record.revenue, (record.price * Decimal::from(record.quantity)).round_dp(2));
        let transaction_date = record.transaction_date.ok_or_else(|| anyhow!("missing transaction date"))?;

        assert!(transaction_date <= now);
        assert!(transaction_date >= now - TimeDelta::days(365));
        assert!(VENUES.contains(&field(&record.venue)?));
        assert!(EVENT_NAMES.contains(&field(&record.event_name)?));
        assert!(TICKET_TYPES.contains(&field(&record.ticket_type)?));
        assert!(PAYMENT_METHODS.contains(&record.payment_method.as_str()));
        assert_eq!(Uuid::parse_str(field(&record.transaction_id)?)?.get_version_num(), 4);
        assert_eq!(Uuid::parse_str(field(&record.customer_id)?)?.get_version_num(), 4);
    }

    Ok(())
}

#[test]
fn test_generated_transaction_ids_are_unique() -> Result<()> {
    let observer = RecordingObserver::default();
    let records = generate(1_000, fixed_now()?, &mut StdRng::seed_from_u64(11), &observer);

    let ids: HashSet<_> = records.iter().map(|record| record.transaction_id.as_deref()).collect();

    assert_eq!(ids.len(), records.len());

    Ok(())
}

#[test]
fn test_seeded_generation_is_reproducible() -> Result<()> {
    let observer = RecordingObserver::default();
    let now = fixed_now()?;

    let first = generate(50, now, &mut StdRng::seed_from_u64(42), &observer);
    let second = generate(50, now, &mut StdRng::seed_from_u64(42), &observer);

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_generation_reports_start_and_finish() -> Result<()> {
    let observer = RecordingObserver::default();
    generate(3, fixed_now()?, &mut StdRng::seed_from_u64(1), &observer);

    assert_eq!(observer.events(), vec![
        Event::GenerationStarted { records: 3 },
        Event::GenerationFinished { records: 3 }
    ]);

    Ok(())
}

#[test]
fn test_saved_dataset_passes_cleaning_untouched() -> Result<()> {
    let observer = RecordingObserver::default();
    let directory = tempdir()?;
    let path = directory.path().join("revenue_data.csv");
    let records = generate(200, fixed_now()?, &mut StdRng::seed_from_u64(3), &observer);

    save(&path, &records, &observer)?;

    let dataset = read_dataset(&path)?;
    let cleaned = clean(dataset.rows, &observer);

    assert_eq!(cleaned.rows, records);
    assert_eq!(cleaned.report.dropped_total(), 0);
    assert_eq!(cleaned.report.corrected_revenues, 0);
    assert!(observer.events().contains(&Event::DatasetSaved { path, records: 200 }));

    Ok(())
}
