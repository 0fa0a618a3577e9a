use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{AppError, AppResult};

/// Prices are persisted as whole cents; this is the scale exposed over the API.
pub const SCALE: u32 = 2;

pub fn to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, SCALE)
}

/// Converts an API amount into cents, rejecting negatives and sub-cent precision.
pub fn to_cents(amount: Decimal) -> AppResult<i64> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AppError::Validation("price must not be negative".into()));
    }
    if amount.normalize().scale() > SCALE {
        return Err(AppError::Validation(
            "price must have at most two decimal places".into(),
        ));
    }
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.trunc().to_i64())
        .ok_or_else(|| AppError::Validation("price is out of range".into()))
}

pub fn line_total(quantity: i32, unit_price: i64) -> AppResult<i64> {
    unit_price
        .checked_mul(i64::from(quantity))
        .ok_or_else(|| AppError::Validation("line total is out of range".into()))
}
