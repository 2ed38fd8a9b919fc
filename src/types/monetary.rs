use crate::types::errors::AmountError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest difference allowed between a stored revenue and `price * quantity`.
pub fn revenue_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// Coerces a raw cell into a decimal amount.
///
/// Accepts plain notation (`"19.99"`, `"-5"`) and scientific notation
/// (`"1.5e2"`). Surrounding whitespace is ignored.
pub fn parse_amount(value: &str) -> Result<Decimal, AmountError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
    }

    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|error| AmountError::InvalidFormat(format!("[{value}] {error}")))
}

/// Coerces a raw cell into a ticket quantity. `"3"` and `"3.0"` are accepted, `"2.5"` is not.
pub fn parse_quantity(value: &str) -> Result<i32, AmountError> {
    let amount = parse_amount(value)?;

    if !amount.fract().is_zero() {
        return Err(AmountError::NotIntegral(value.trim().to_string()));
    }

    amount.trunc().to_i32()
        .ok_or_else(|| AmountError::Overflow(value.trim().to_string()))
}
