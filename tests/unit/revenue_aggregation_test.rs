// Property-based tests for the revenue aggregator.
//
// Aggregation folds completed orders into per-currency buckets with plain
// addition, so any permutation of the order history must produce the same
// totals, and every completed order must land in exactly one bucket.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use kamba_payments::commissions::seller_earning;
use kamba_payments::orders::{correct_sale_amount, Order, OrderStatus};
use kamba_payments::revenue::aggregate_revenue;

const CURRENCIES: [&str; 7] = ["KZ", "EUR", "MZN", "GBP", "USD", "BRL", "XOF"];
const METHODS: [&str; 5] = ["express", "kambapay", "card", "paypal", "referencia"];

fn completed_order(amount: &str, currency: &str, method: &str) -> Order {
    let mut order = Order::new(
        "prod-1".to_string(),
        "seller-1".to_string(),
        amount.to_string(),
        currency.to_string(),
        method.to_string(),
    )
    .unwrap();
    order.status = OrderStatus::Completed;
    order
}

fn orders_from(rows: &[(u64, usize, usize)]) -> Vec<Order> {
    rows.iter()
        .map(|(cents, currency_idx, method_idx)| {
            let amount = Decimal::from(*cents) / Decimal::from(100);
            completed_order(
                &amount.to_string(),
                CURRENCIES[currency_idx % CURRENCIES.len()],
                METHODS[method_idx % METHODS.len()],
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn test_totals_are_permutation_invariant(
        rows in prop::collection::vec((0u64..10_000_000u64, 0usize..7, 0usize..5), 0..40),
        rotation in 0usize..40
    ) {
        let orders = orders_from(&rows);

        let mut reversed = orders.clone();
        reversed.reverse();

        let mut rotated = orders.clone();
        if !rotated.is_empty() {
            let mid = rotation % rotated.len();
            rotated.rotate_left(mid);
        }

        let baseline = aggregate_revenue(&orders);
        for other in [aggregate_revenue(&reversed), aggregate_revenue(&rotated)] {
            for currency in CURRENCIES {
                prop_assert_eq!(baseline.total_for(currency), other.total_for(currency));
            }
        }
    }

    #[test]
    fn test_totals_match_per_order_earnings(
        rows in prop::collection::vec((0u64..10_000_000u64, 0usize..7, 0usize..5), 0..40)
    ) {
        let orders = orders_from(&rows);
        let summary = aggregate_revenue(&orders);

        for currency in CURRENCIES {
            let expected: Decimal = orders
                .iter()
                .filter(|o| o.actual_currency() == currency)
                .map(|o| {
                    let amount = o.actual_amount().unwrap();
                    seller_earning(
                        correct_sale_amount(amount, currency),
                        Some(&o.payment_method),
                    )
                })
                .sum();

            prop_assert_eq!(summary.total_for(currency), expected);
        }
    }

    #[test]
    fn test_each_order_lands_in_one_bucket(
        rows in prop::collection::vec((1u64..10_000_000u64, 0usize..7, 0usize..5), 1..40)
    ) {
        let orders = orders_from(&rows);
        let summary = aggregate_revenue(&orders);

        // the grand total equals the sum over buckets, i.e. nothing is
        // counted twice or dropped
        let bucket_sum: Decimal = CURRENCIES
            .iter()
            .map(|c| summary.total_for(c))
            .sum();
        let direct_sum: Decimal = orders
            .iter()
            .map(|o| {
                let currency = o.actual_currency();
                let amount = o.actual_amount().unwrap();
                seller_earning(correct_sale_amount(amount, currency), Some(&o.payment_method))
            })
            .sum();

        prop_assert_eq!(bucket_sum, direct_sum);
    }
}

#[test]
fn test_spec_reference_orders() {
    let summary = aggregate_revenue(&[completed_order("100", "KZ", "express")]);
    assert_eq!(summary.total_for("KZ"), dec!(91.01));

    let summary = aggregate_revenue(&[completed_order("100", "EUR", "card")]);
    assert_eq!(summary.total_for("EUR"), dec!(90.01));
}

#[test]
fn test_incomplete_orders_do_not_count() {
    let mut pending = completed_order("100", "KZ", "express");
    pending.status = OrderStatus::Pending;
    let mut failed = completed_order("100", "KZ", "express");
    failed.status = OrderStatus::Failed;

    let summary = aggregate_revenue(&[pending, failed]);
    assert!(summary.is_empty());
}

#[test]
fn test_settlement_values_choose_the_bucket() {
    let mut order = completed_order("85000", "KZ", "card");
    order.set_settlement_values("79.90".to_string(), "EUR".to_string());

    let summary = aggregate_revenue(&[order]);
    assert_eq!(summary.total_for("KZ"), dec!(0));
    assert_eq!(summary.total_for("EUR"), dec!(79.90) * dec!(0.9001));
}

#[test]
fn test_malformed_rows_are_skipped_not_fatal() {
    let summary = aggregate_revenue(&[
        completed_order("not-a-number", "KZ", "express"),
        completed_order("100", "KZ", "express"),
    ]);

    assert_eq!(summary.total_for("KZ"), dec!(91.01));
}
