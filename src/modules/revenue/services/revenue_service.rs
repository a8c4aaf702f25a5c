use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::Result;
use crate::modules::commissions::services::seller_earning;
use crate::modules::orders::services::correct_sale_amount;
use crate::modules::orders::{Order, OrderRepository};

use super::super::models::RevenueSummary;

/// Seller revenue aggregation over the order history.
///
/// Totals are recomputed from scratch on every call; per-seller order
/// volume is small enough that incremental state would buy nothing.
pub struct RevenueService {
    orders: Arc<dyn OrderRepository>,
}

impl RevenueService {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    /// Per-currency seller earnings across the seller's completed orders
    pub async fn revenue_by_currency(&self, seller_id: &str) -> Result<RevenueSummary> {
        let orders = self.orders.orders_for_seller(seller_id).await?;
        let summary = aggregate_revenue(&orders);

        debug!(
            seller_id = seller_id,
            currencies = summary.len(),
            orders = orders.len(),
            "Aggregated seller revenue"
        );

        Ok(summary)
    }

    /// Seller's total revenue expressed in Kwanza at the fixed rates
    pub async fn total_in_kwanza(&self, seller_id: &str) -> Result<Decimal> {
        Ok(self.revenue_by_currency(seller_id).await?.total_in_kwanza())
    }
}

/// Fold completed orders into per-currency seller earnings.
///
/// Each order lands in exactly one bucket: its settled (actual) currency,
/// with the settled amount run through the mis-tag correction before the
/// commission split. Accumulation is a plain sum, so input order cannot
/// change the result. Orders whose amount fails to parse are skipped and
/// logged rather than poisoning the totals.
pub fn aggregate_revenue(orders: &[Order]) -> RevenueSummary {
    let mut summary = RevenueSummary::new();
    let mut skipped = 0usize;

    for order in orders.iter().filter(|o| o.is_completed()) {
        let currency = order.actual_currency();

        let amount = match order.actual_amount() {
            Ok(amount) => amount,
            Err(e) => {
                warn!(
                    order_id = order.get_id().unwrap_or("unknown"),
                    error = %e,
                    "Skipping order with malformed amount"
                );
                skipped += 1;
                continue;
            }
        };

        let corrected = correct_sale_amount(amount, currency);
        let earning = seller_earning(corrected, Some(&order.payment_method));

        summary.add(currency, earning);
    }

    if skipped > 0 {
        warn!(skipped = skipped, "Orders excluded from revenue aggregation");
    }

    summary
}
