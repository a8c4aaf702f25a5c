use actix_web::{get, web, HttpResponse};
use serde::Serialize;
use tracing::debug;

use crate::core::{Currency, Result};
use crate::modules::levels::models::LevelProgress;
use crate::modules::levels::services::level_progress;

use super::super::services::RevenueService;

/// One currency bucket of the revenue response
#[derive(Debug, Serialize)]
pub struct RevenueBucketResponse {
    pub currency: String,
    pub label: String,
    /// Decimal as string for JSON precision
    pub total: String,
}

/// Level block of the revenue response
#[derive(Debug, Serialize)]
pub struct LevelProgressResponse {
    pub current_level: Option<String>,
    pub next_level: Option<String>,
    pub progress_percent: String,
    pub achieved_levels: Vec<String>,
}

impl From<LevelProgress> for LevelProgressResponse {
    fn from(progress: LevelProgress) -> Self {
        Self {
            current_level: progress.current_level.map(|l| l.name().to_string()),
            next_level: progress.next_level.map(|l| l.name().to_string()),
            progress_percent: progress.progress_percent.to_string(),
            achieved_levels: progress
                .achieved_levels
                .into_iter()
                .map(|l| l.name().to_string())
                .collect(),
        }
    }
}

/// Seller revenue response
#[derive(Debug, Serialize)]
pub struct SellerRevenueResponse {
    pub seller_id: String,
    pub revenue: Vec<RevenueBucketResponse>,
    pub total_kz: String,
    pub level: LevelProgressResponse,
}

/// Configure seller dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/sellers").service(get_seller_revenue));
}

/// GET /sellers/{seller_id}/revenue
///
/// Per-currency earnings for the seller's completed orders, the Kwanza
/// reference total, and where that total sits on the level ladder.
/// Everything is recomputed from the order history on each request.
#[get("/{seller_id}/revenue")]
async fn get_seller_revenue(
    path: web::Path<String>,
    revenue: web::Data<RevenueService>,
) -> Result<HttpResponse> {
    let seller_id = path.into_inner();

    let summary = revenue.revenue_by_currency(&seller_id).await?;
    let total_kz = summary.total_in_kwanza();
    let progress = level_progress(total_kz);

    debug!(
        seller_id = seller_id.as_str(),
        total_kz = %total_kz,
        "Serving seller revenue"
    );

    let response = SellerRevenueResponse {
        seller_id,
        revenue: summary
            .iter()
            .map(|(currency, total)| RevenueBucketResponse {
                currency: currency.clone(),
                label: Currency::label_for(currency).to_string(),
                total: total.to_string(),
            })
            .collect(),
        total_kz: total_kz.to_string(),
        level: progress.into(),
    };

    Ok(HttpResponse::Ok().json(response))
}
