// Seller dashboard endpoints over a seeded order history.

use actix_web::{test, web, App};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

use kamba_payments::modules::orders::{
    InMemoryOrderRepository, Order, OrderRepository, OrderStatus,
};
use kamba_payments::modules::revenue::RevenueService;
use kamba_payments::modules::{commissions, revenue};

async fn seed_completed(
    orders: &InMemoryOrderRepository,
    seller_id: &str,
    amount: &str,
    currency: &str,
    method: &str,
) {
    let mut order = Order::new(
        "prod-1".to_string(),
        seller_id.to_string(),
        amount.to_string(),
        currency.to_string(),
        method.to_string(),
    )
    .unwrap();
    order.status = OrderStatus::Completed;
    orders.insert(order).await.unwrap();
}

async fn dashboard(
    orders: &std::sync::Arc<InMemoryOrderRepository>,
    seller_id: &str,
) -> serde_json::Value {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(RevenueService::new(orders.clone())))
            .configure(revenue::controllers::configure)
            .configure(commissions::controllers::configure),
    )
    .await;

    let request = test::TestRequest::get()
        .uri(&format!("/sellers/{}/revenue", seller_id))
        .to_request();
    test::call_and_read_body_json(&app, request).await
}

#[actix_web::test]
async fn test_revenue_is_bucketed_per_currency() {
    let orders = InMemoryOrderRepository::new();
    seed_completed(&orders, "seller-1", "100", "KZ", "express").await;
    seed_completed(&orders, "seller-1", "50", "KZ", "kambapay").await;
    seed_completed(&orders, "seller-1", "100", "EUR", "card").await;
    // other sellers' orders stay out of the aggregation
    seed_completed(&orders, "seller-2", "999", "KZ", "express").await;

    let body = dashboard(&orders, "seller-1").await;
    let buckets = body["revenue"].as_array().unwrap();
    assert_eq!(buckets.len(), 2);

    // BTreeMap ordering: EUR before KZ
    assert_eq!(buckets[0]["currency"], "EUR");
    assert_eq!(
        Decimal::from_str(buckets[0]["total"].as_str().unwrap()).unwrap(),
        dec!(90.01)
    );
    assert_eq!(buckets[1]["currency"], "KZ");
    assert_eq!(
        Decimal::from_str(buckets[1]["total"].as_str().unwrap()).unwrap(),
        dec!(150) * dec!(0.9101)
    );
}

#[actix_web::test]
async fn test_total_kz_converts_foreign_buckets() {
    let orders = InMemoryOrderRepository::new();
    seed_completed(&orders, "seller-1", "100", "EUR", "card").await;

    let body = dashboard(&orders, "seller-1").await;

    // 100 × 0.9001 EUR at the fixed 1053 rate
    let expected = dec!(90.01) * dec!(1053);
    assert_eq!(
        Decimal::from_str(body["total_kz"].as_str().unwrap()).unwrap(),
        expected
    );
}

#[actix_web::test]
async fn test_level_reflects_kwanza_total() {
    let orders = InMemoryOrderRepository::new();
    // 1,200,000 KZ gross at the Angola tier -> 1,092,120 KZ earning
    seed_completed(&orders, "seller-1", "1200000", "KZ", "express").await;

    let body = dashboard(&orders, "seller-1").await;

    assert_eq!(body["level"]["current_level"], "Bronze");
    assert_eq!(body["level"]["next_level"], "Zinga");
    assert_eq!(body["level"]["achieved_levels"][0], "Bronze");
}

#[actix_web::test]
async fn test_unknown_seller_gets_an_empty_dashboard() {
    let orders = InMemoryOrderRepository::new();

    let body = dashboard(&orders, "ghost").await;

    assert!(body["revenue"].as_array().unwrap().is_empty());
    assert_eq!(
        Decimal::from_str(body["total_kz"].as_str().unwrap()).unwrap(),
        dec!(0)
    );
    assert_eq!(body["level"]["current_level"], serde_json::Value::Null);
    assert_eq!(body["level"]["next_level"], "Bronze");
}

#[actix_web::test]
async fn test_unrecognized_currency_is_labelled_internacional() {
    let orders = InMemoryOrderRepository::new();
    seed_completed(&orders, "seller-1", "100", "XOF", "card").await;

    let body = dashboard(&orders, "seller-1").await;
    let buckets = body["revenue"].as_array().unwrap();

    assert_eq!(buckets[0]["currency"], "XOF");
    assert_eq!(buckets[0]["label"], "Internacional");
}

#[actix_web::test]
async fn test_commission_preview_endpoint() {
    let orders = InMemoryOrderRepository::new();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(RevenueService::new(orders.clone())))
            .configure(revenue::controllers::configure)
            .configure(commissions::controllers::configure),
    )
    .await;

    let request = test::TestRequest::get()
        .uri("/commissions/preview?payment_method=express&amount=100")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["commission_rate"], "0.0899");
    assert_eq!(body["seller_rate"], "0.9101");
    assert_eq!(
        Decimal::from_str(body["seller_earning"].as_str().unwrap()).unwrap(),
        dec!(91.01)
    );

    // unknown methods price at the default tier
    let request = test::TestRequest::get()
        .uri("/commissions/preview?payment_method=card")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["commission_rate"], "0.0999");
    assert!(body.get("seller_earning").is_none());
}
