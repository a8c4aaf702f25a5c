// Tests for currency parsing, labels and the fixed reference rates.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use kamba_payments::core::Currency;

const CODES: [&str; 6] = ["KZ", "EUR", "MZN", "GBP", "USD", "BRL"];

#[test]
fn test_closed_set_parses_case_insensitively() {
    for code in CODES {
        assert!(Currency::parse(code).is_some());
        assert!(Currency::parse(&code.to_lowercase()).is_some());
        assert_eq!(
            Currency::parse(&format!("  {}  ", code)),
            Currency::parse(code)
        );
    }
}

#[test]
fn test_unknown_codes_fall_back_instead_of_erroring() {
    assert_eq!(Currency::parse("AOA"), None);
    assert_eq!(Currency::label_for("AOA"), "Internacional");
    assert_eq!(Currency::kz_rate_for("AOA"), Decimal::ONE);
}

#[test]
fn test_eur_to_kz_rate_matches_the_data_patch() {
    // the mis-tag correction multiplies by this exact rate
    assert_eq!(Currency::EUR.kz_rate(), dec!(1053));
    assert_eq!(Currency::convert(dec!(149), "EUR", "KZ"), dec!(156897));
}

proptest! {
    #[test]
    fn test_same_currency_conversion_is_identity(
        cents in 0u64..1_000_000_000u64,
        index in 0usize..6
    ) {
        let amount = Decimal::from(cents) / Decimal::from(100);
        let code = CODES[index];

        prop_assert_eq!(Currency::convert(amount, code, code), amount);
    }

    #[test]
    fn test_conversion_round_trips_through_kwanza(
        units in 0u64..1_000_000u64,
        index in 0usize..6
    ) {
        let amount = Decimal::from(units);
        let code = CODES[index];

        let there = Currency::convert(amount, code, "KZ");
        let back = Currency::convert(there, "KZ", code);

        prop_assert_eq!(back, amount);
    }

    #[test]
    fn test_unknown_pairs_convert_at_identity(
        cents in 0u64..1_000_000_000u64,
        from in "[A-Z]{4}",
        to in "[A-Z]{4}"
    ) {
        let amount = Decimal::from(cents) / Decimal::from(100);

        prop_assert_eq!(Currency::convert(amount, &from, &to), amount);
    }

    #[test]
    fn test_conversion_preserves_sign_and_scale_ordering(
        units in 1u64..1_000_000u64,
        index in 0usize..6
    ) {
        let amount = Decimal::from(units);
        let code = CODES[index];
        let converted = Currency::convert(amount, code, "KZ");

        // every supported currency is worth at least one Kwanza
        prop_assert!(converted >= amount);
    }
}
