use super::{parse_amount, parse_quantity, revenue_tolerance, timestamp};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

fn date_time(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .expect("valid test timestamp")
}

#[test]
fn test_amount_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1.0", "1.0"),
        ("19.99", "19.99"),
        ("-5", "-5"),
        ("  42.50  ", "42.50"),
        ("1.5e2", "150"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(parse_amount(input_string)?, Decimal::from_str(expected_output)?);
    }

    Ok(())
}

#[test]
fn test_amount_fails_to_parse_invalid_strings() {
    assert!(parse_amount("abc").is_err());
    assert!(parse_amount("1.2.3").is_err());
    assert!(parse_amount("").is_err());
    assert!(parse_amount("   ").is_err());
    assert!(parse_amount("NaN").is_err());
}

#[test]
fn test_quantity_accepts_whole_numbers_only() -> Result<()> {
    assert_eq!(parse_quantity("3")?, 3);
    assert_eq!(parse_quantity("3.0")?, 3);
    assert_eq!(parse_quantity("-2")?, -2);
    assert!(parse_quantity("2.5").is_err());
    assert!(parse_quantity("99999999999").is_err());
    assert!(parse_quantity("three").is_err());

    Ok(())
}

#[test]
fn test_revenue_tolerance_is_one_cent() -> Result<()> {
    assert_eq!(revenue_tolerance(), Decimal::from_str("0.01")?);

    Ok(())
}

#[test]
fn test_timestamp_text_representation_is_sortable() {
    assert_eq!(timestamp::format(&date_time(7, 5, 3)), "2024-03-09 07:05:03");
    assert!(timestamp::format(&date_time(7, 5, 3)) < timestamp::format(&date_time(17, 0, 0)));
}

#[test]
fn test_timestamp_parses_both_separators_and_fractions() -> Result<()> {
    let expected = date_time(7, 5, 3);

    assert_eq!(timestamp::parse("2024-03-09 07:05:03")?, expected);
    assert_eq!(timestamp::parse("2024-03-09T07:05:03")?, expected);
    assert_eq!(timestamp::parse(" 2024-03-09 07:05:03 ")?, expected);

    let fractional = timestamp::parse("2024-03-09 07:05:03.250000")?;
    assert_eq!(timestamp::format(&fractional), "2024-03-09 07:05:03.250");

    Ok(())
}

#[test]
fn test_timestamp_rejects_garbage() {
    assert!(timestamp::parse("yesterday").is_err());
    assert!(timestamp::parse("2024-13-40 00:00:00").is_err());
    assert!(timestamp::parse("").is_err());
}
