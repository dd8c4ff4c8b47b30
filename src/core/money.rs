use rust_decimal::Decimal;

use crate::core::{AppError, Result};

/// Fractional digits a stored amount keeps (`DECIMAL(20, 6)`)
pub const MONEY_SCALE: u32 = 6;

/// Largest amount a `DECIMAL(20, 6)` column holds: 99999999999999.999999
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1661992959, 1808227885, 5, false, MONEY_SCALE);

/// Check that `amount` is non-negative and fits the money columns
pub fn validate_amount(amount: Decimal, field: &str) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(AppError::validation(format!("{} cannot be negative", field)));
    }

    if amount > MAX_AMOUNT {
        return Err(AppError::validation(format!(
            "{} cannot exceed {}",
            field, MAX_AMOUNT
        )));
    }

    if amount.normalize().scale() > MONEY_SCALE {
        return Err(AppError::validation(format!(
            "{} cannot have more than {} decimal places",
            field, MONEY_SCALE
        )));
    }

    Ok(())
}

/// Round a derived amount to the stored scale
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp(MONEY_SCALE)
}

/// Overflow-checked running total
pub fn checked_total<I>(amounts: I) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
        .ok_or_else(|| AppError::internal("Amount total overflowed"))
}
