use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::commissions::services::seller_earning;
use crate::modules::gateways::services::GatewayAuthClient;
use crate::modules::orders::services::correct_sale_amount;
use crate::modules::orders::{OrderRepository, OrderStatus};

use super::super::models::{AccessGrant, PaymentNotification};
use super::super::repositories::{AccessGrantRepository, BalanceRepository};

/// Outcome of processing a payment notification
#[derive(Debug, Clone)]
pub enum SettlementOutcome {
    /// Order settled: seller credited and access granted
    Settled {
        order_id: String,
        reference: String,
        currency: String,
        earning: Decimal,
    },

    /// The reference (or order) was already settled; nothing was credited
    Duplicate {
        order_id: String,
        reference: String,
    },

    /// The gateway reported a failed payment; the order was closed
    Failed {
        order_id: String,
        reference: String,
    },
}

/// Webhook-driven order completion.
///
/// One settlement credits the seller exactly once: the gateway reference
/// is checked before any write, and an already-completed order is reported
/// as a duplicate instead of being re-credited.
pub struct SettlementService {
    orders: Arc<dyn OrderRepository>,
    balances: Arc<dyn BalanceRepository>,
    access_grants: Arc<dyn AccessGrantRepository>,
    gateway: Option<Arc<GatewayAuthClient>>,
}

impl SettlementService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        balances: Arc<dyn BalanceRepository>,
        access_grants: Arc<dyn AccessGrantRepository>,
    ) -> Self {
        Self {
            orders,
            balances,
            access_grants,
            gateway: None,
        }
    }

    /// Acknowledge settled payments back to the gateway
    pub fn with_gateway(mut self, gateway: Arc<GatewayAuthClient>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Apply a verified payment notification to the order it settles
    pub async fn settle(&self, notification: PaymentNotification) -> Result<SettlementOutcome> {
        if notification.reference.trim().is_empty() {
            return Err(AppError::validation("Payment reference cannot be empty"));
        }

        if notification.order_id.trim().is_empty() {
            return Err(AppError::validation("Order ID cannot be empty"));
        }

        // idempotency: a reference we already settled is acknowledged, not re-applied
        if let Some(existing) = self.orders.find_by_reference(&notification.reference).await? {
            info!(
                reference = notification.reference.as_str(),
                order_id = existing.get_id().unwrap_or("unknown"),
                "Duplicate payment notification"
            );
            return Ok(SettlementOutcome::Duplicate {
                order_id: existing.get_id().unwrap_or_default().to_string(),
                reference: notification.reference,
            });
        }

        let mut order = self
            .orders
            .find_by_id(&notification.order_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {}", notification.order_id)))?;

        if order.is_completed() {
            return Ok(SettlementOutcome::Duplicate {
                order_id: notification.order_id,
                reference: notification.reference,
            });
        }

        if !notification.is_paid() {
            warn!(
                order_id = notification.order_id.as_str(),
                status = notification.status.as_str(),
                "Gateway reported unsuccessful payment"
            );
            order.status = OrderStatus::Failed;
            self.orders.update(order).await?;
            return Ok(SettlementOutcome::Failed {
                order_id: notification.order_id,
                reference: notification.reference,
            });
        }

        // the gateway's settlement values override the checkout ones when
        // they differ (provider settled in another currency)
        if !notification.currency.trim().is_empty()
            && notification.currency.trim().to_uppercase() != order.currency.trim().to_uppercase()
        {
            order.set_settlement_values(notification.amount.clone(), notification.currency.clone());
        }

        order.mark_completed(notification.reference.clone());
        let order = self.orders.update(order).await?;

        let currency = order.actual_currency().trim().to_uppercase();
        let amount = order.actual_amount()?;
        let corrected = correct_sale_amount(amount, &currency);
        let earning = seller_earning(corrected, Some(&order.payment_method));

        self.balances
            .credit(&order.seller_id, &currency, earning)
            .await?;

        self.access_grants
            .grant(AccessGrant::new(
                order.get_id().unwrap_or_default().to_string(),
                order.product_id.clone(),
            ))
            .await?;

        info!(
            order_id = order.get_id().unwrap_or("unknown"),
            reference = notification.reference.as_str(),
            currency = currency.as_str(),
            earning = %earning,
            "Order settled"
        );

        // acknowledgement is best-effort; the gateway re-delivers webhooks
        // it never hears back about, and the reference check absorbs those
        if let Some(gateway) = &self.gateway {
            if let Err(e) = gateway.acknowledge_payment(&notification.reference).await {
                warn!(
                    reference = notification.reference.as_str(),
                    error = %e,
                    "Failed to acknowledge payment with gateway"
                );
            }
        }

        Ok(SettlementOutcome::Settled {
            order_id: order.get_id().unwrap_or_default().to_string(),
            reference: notification.reference,
            currency,
            earning,
        })
    }
}
