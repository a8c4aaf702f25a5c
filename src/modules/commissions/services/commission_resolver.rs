use rust_decimal::Decimal;

/// Platform fee for Angola-local payment methods (8.99%)
pub const ANGOLA_COMMISSION_RATE: Decimal = Decimal::from_parts(899, 0, 0, false, 4);

/// Platform fee for every other payment method (9.99%)
pub const DEFAULT_COMMISSION_RATE: Decimal = Decimal::from_parts(999, 0, 0, false, 4);

/// Payment method identifiers billed at the Angola-local tier.
///
/// Canonical ids plus the legacy aliases still present in the order
/// history. Closed list; membership is checked on the normalized id.
const ANGOLA_PAYMENT_METHODS: [&str; 7] = [
    "express",
    "multicaixa_express",
    "reference",
    "referencia",
    "transfer",
    "transferencia",
    "kambapay",
];

/// True when the payment method settles through an Angola-local rail
pub fn is_angola_method(payment_method: &str) -> bool {
    let normalized = payment_method.trim().to_lowercase();
    ANGOLA_PAYMENT_METHODS.contains(&normalized.as_str())
}

/// Platform fee rate for a payment method.
///
/// Missing or empty methods bill at the default tier; resolution never
/// fails. Matching is case-insensitive and ignores surrounding whitespace.
pub fn commission_rate(payment_method: Option<&str>) -> Decimal {
    match payment_method {
        Some(method) if !method.trim().is_empty() => {
            if is_angola_method(method) {
                ANGOLA_COMMISSION_RATE
            } else {
                DEFAULT_COMMISSION_RATE
            }
        }
        _ => DEFAULT_COMMISSION_RATE,
    }
}

/// Fraction of the gross amount the seller keeps.
///
/// Complement of the platform fee: `seller_rate(m) + commission_rate(m) == 1`
/// for every input, including `None`.
pub fn seller_rate(payment_method: Option<&str>) -> Decimal {
    Decimal::ONE - commission_rate(payment_method)
}

/// Seller's share of a gross order amount.
///
/// Purely multiplicative; rounding happens at the display layer, not here.
pub fn seller_earning(gross: Decimal, payment_method: Option<&str>) -> Decimal {
    gross * seller_rate(payment_method)
}

/// Platform's share of a gross order amount
pub fn platform_fee(gross: Decimal, payment_method: Option<&str>) -> Decimal {
    gross * commission_rate(payment_method)
}
