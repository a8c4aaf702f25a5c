use rust_decimal::Decimal;

use crate::core::Currency;

/// Amounts known to be EUR values that a historical checkout bug stored
/// under the "KZ" currency tag. Closed list: the patch must only ever
/// match these exact values, never a range or pattern.
const MISTAGGED_EUR_AMOUNTS: [Decimal; 4] = [
    Decimal::from_parts(149, 0, 0, false, 0),
    Decimal::from_parts(1729, 0, 0, false, 1),
    Decimal::from_parts(156_897, 0, 0, false, 3),
    Decimal::from_parts(182_063, 0, 0, false, 3),
];

/// Repair a sale amount from the known mis-tagged rows.
///
/// An amount on the closed list carrying the "KZ" tag is really a EUR
/// value; re-convert it with the fixed EUR→KZ rate. Every other
/// (amount, currency) pair passes through unchanged.
pub fn correct_sale_amount(amount: Decimal, currency: &str) -> Decimal {
    if Currency::parse(currency) == Some(Currency::KZ)
        && MISTAGGED_EUR_AMOUNTS.contains(&amount)
    {
        return amount * Currency::EUR.kz_rate();
    }

    amount
}
