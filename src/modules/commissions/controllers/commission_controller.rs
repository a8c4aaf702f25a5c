use actix_web::{get, web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::commissions::services::{
    commission_rate, platform_fee, seller_earning, seller_rate,
};

/// Query parameters for the commission preview endpoint
#[derive(Debug, Deserialize)]
pub struct CommissionPreviewQuery {
    /// Payment method to price; omitted means the default tier
    #[serde(default)]
    pub payment_method: Option<String>,
    /// Optional gross amount to split (decimal string)
    #[serde(default)]
    pub amount: Option<String>,
}

/// Commission preview response
#[derive(Debug, Serialize)]
pub struct CommissionPreviewResponse {
    pub payment_method: Option<String>,
    /// Decimals as strings for JSON precision
    pub commission_rate: String,
    pub seller_rate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_earning: Option<String>,
}

/// Configure commission routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/commissions").service(preview_commission));
}

/// GET /commissions/preview
///
/// Resolves the fee tier for a payment method and, when an amount is
/// given, the resulting platform/seller split.
#[get("/preview")]
async fn preview_commission(
    query: web::Query<CommissionPreviewQuery>,
) -> Result<HttpResponse> {
    let query = query.into_inner();
    let method = query.payment_method.as_deref();

    let (fee, earning) = match &query.amount {
        Some(raw) => {
            let gross: Decimal = raw.trim().parse().map_err(|_| {
                AppError::validation(format!("Malformed amount: {:?}", raw))
            })?;
            (
                Some(platform_fee(gross, method).to_string()),
                Some(seller_earning(gross, method).to_string()),
            )
        }
        None => (None, None),
    };

    Ok(HttpResponse::Ok().json(CommissionPreviewResponse {
        payment_method: query.payment_method.clone(),
        commission_rate: commission_rate(method).to_string(),
        seller_rate: seller_rate(method).to_string(),
        platform_fee: fee,
        seller_earning: earning,
    }))
}
