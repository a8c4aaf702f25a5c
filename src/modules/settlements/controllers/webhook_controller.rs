use actix_web::{post, web, HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::core::{AppError, Result};
use crate::modules::gateways::services::verify_signature;

use super::super::models::PaymentNotification;
use super::super::services::{SettlementOutcome, SettlementService};

const SIGNATURE_HEADER: &str = "X-Webhook-Signature";

/// Webhook response structure
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WebhookResponse {
    Settled {
        order_id: String,
        reference: String,
        currency: String,
        earning: String,
    },
    Duplicate {
        order_id: String,
        reference: String,
    },
    Failed {
        order_id: String,
        reference: String,
    },
}

impl From<SettlementOutcome> for WebhookResponse {
    fn from(outcome: SettlementOutcome) -> Self {
        match outcome {
            SettlementOutcome::Settled {
                order_id,
                reference,
                currency,
                earning,
            } => WebhookResponse::Settled {
                order_id,
                reference,
                currency,
                // decimal as string for JSON precision
                earning: earning.to_string(),
            },
            SettlementOutcome::Duplicate {
                order_id,
                reference,
            } => WebhookResponse::Duplicate {
                order_id,
                reference,
            },
            SettlementOutcome::Failed {
                order_id,
                reference,
            } => WebhookResponse::Failed {
                order_id,
                reference,
            },
        }
    }
}

/// Configure webhook routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/webhooks").service(process_payment_webhook));
}

/// POST /webhooks/payments
///
/// Receives payment confirmations from the gateway. The raw body is
/// verified against the shared webhook secret before anything is parsed;
/// a bad signature is rejected without touching any order.
#[post("/payments")]
async fn process_payment_webhook(
    req: HttpRequest,
    body: web::Bytes,
    config: web::Data<Config>,
    settlements: web::Data<SettlementService>,
) -> Result<HttpResponse> {
    let signature = req
        .headers()
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing webhook signature"))?;

    if !verify_signature(&config.gateway.webhook_secret, &body, signature)? {
        warn!("Webhook signature verification failed");
        return Err(AppError::unauthorized("Invalid webhook signature"));
    }

    let notification: PaymentNotification = serde_json::from_slice(&body)
        .map_err(|e| AppError::validation(format!("Invalid webhook payload: {}", e)))?;

    info!(
        reference = notification.reference.as_str(),
        order_id = notification.order_id.as_str(),
        "Received payment notification"
    );

    let outcome = settlements.settle(notification).await?;

    Ok(HttpResponse::Ok().json(WebhookResponse::from(outcome)))
}
