//! HTTP-level tests for the dashboard routes
//!
//! Builds the real route table behind the bearer auth middleware, backed by
//! an in-memory backend.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::{test, web, App};
use dashboard_metrics::backend::{DashboardResource, Role};
use dashboard_metrics::dashboard::{DashboardService, DashboardSettings};
use dashboard_metrics::middleware::BearerAuth;
use helpers::{StaticBackend, TestDataFactory};
use serde_json::Value;

fn full_backend() -> StaticBackend {
    StaticBackend::new()
        .with_payload(DashboardResource::Wallet, TestDataFactory::zone_wallets())
        .with_payload(DashboardResource::Performance, TestDataFactory::team_performance())
        .with_payload(DashboardResource::Orders, TestDataFactory::recent_orders())
}

macro_rules! init_app {
    ($backend:expr) => {{
        let service = DashboardService::new($backend, DashboardSettings::default());
        test::init_service(
            App::new()
                .wrap(BearerAuth)
                .app_data(web::Data::new(service))
                .configure(dashboard_metrics::configure_routes),
        )
        .await
    }};
}

fn authed_get(uri: &str) -> test::TestRequest {
    test::TestRequest::get()
        .uri(uri)
        .insert_header(("Authorization", "Bearer token-rm"))
        .insert_header(("X-User-Id", "rm-1"))
}

#[actix_web::test]
async fn test_financials_endpoint() {
    let backend = Arc::new(full_backend());
    let app = init_app!(backend.clone());

    let req = authed_get("/dashboard/regional-manager/financials").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    // Amounts serialize as exact decimal strings
    assert_eq!(body["mainWallet"], "350");
    assert_eq!(body["commissions"]["sales"], "10");
    assert_eq!(body["commissions"]["delivery"], "5");
    assert_eq!(body["currency"], "NGN");
    assert_eq!(body["display"]["totalCommissions"], "₦15.00");

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].role, Role::RegionalManager);
    assert_eq!(calls[0].token, "token-rm");
    assert_eq!(calls[0].user_id.as_deref(), Some("rm-1"));
}

#[actix_web::test]
async fn test_leaderboard_endpoint() {
    let app = init_app!(Arc::new(full_backend()));

    let req = authed_get("/dashboard/sales-manager/leaderboard?metric=sales&limit=2").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["metric"], "sales");
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["identity"]["firstName"], "Bola");
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["metrics"]["sales"], 9);
    assert_eq!(entries[0]["isTopPerformer"], true);
    assert_eq!(entries[1]["identity"]["firstName"], "Chi");
    assert_eq!(entries[1]["rank"], 2);
    assert_eq!(entries[1]["isTopPerformer"], false);
}

#[actix_web::test]
async fn test_leaderboard_uses_default_metric() {
    let app = init_app!(Arc::new(full_backend()));

    let req = authed_get("/dashboard/bdm/leaderboard").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["metric"], "sales");
    assert_eq!(body["entries"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_zero_limit_is_bad_request() {
    let app = init_app!(Arc::new(full_backend()));

    let req = authed_get("/dashboard/bdm/leaderboard?limit=0").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_weekly_orders_endpoint() {
    let app = init_app!(Arc::new(full_backend()));

    let req = authed_get("/dashboard/agent/orders/weekly?mode=date").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["mode"], "date");
    let buckets = body["buckets"].as_array().unwrap();
    assert_eq!(buckets.len(), 7);
    for bucket in buckets {
        assert!(bucket["effectiveCount"].as_u64() <= bucket["submittedCount"].as_u64());
    }
}

#[actix_web::test]
async fn test_overview_reports_degraded_sections() {
    let backend = StaticBackend::new()
        .with_payload(DashboardResource::Wallet, TestDataFactory::zone_wallets())
        .with_failure(DashboardResource::Performance, "backend timeout");
    let app = init_app!(Arc::new(backend));

    let req = authed_get("/dashboard/state-manager/overview").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["role"], "state-manager");
    assert_eq!(body["financials"]["mainWallet"], "350");
    assert_eq!(body["degraded"], serde_json::json!(["performance"]));
    assert_eq!(body["leaderboard"]["entries"], serde_json::json!([]));
    assert_eq!(body["weeklyOrders"]["buckets"].as_array().unwrap().len(), 7);
}

#[actix_web::test]
async fn test_unknown_role_is_not_found() {
    let app = init_app!(Arc::new(full_backend()));

    let req = authed_get("/dashboard/ceo/financials").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_upstream_failure_is_bad_gateway() {
    let backend = StaticBackend::new().with_failure(DashboardResource::Wallet, "backend timeout");
    let app = init_app!(Arc::new(backend));

    let req = authed_get("/dashboard/agent/financials").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);
}

#[actix_web::test]
async fn test_missing_token_is_unauthorized() {
    let app = init_app!(Arc::new(full_backend()));

    let req = test::TestRequest::get()
        .uri("/dashboard/agent/financials")
        .to_request();
    let err = test::try_call_service(&app, req)
        .await
        .expect_err("request without token must fail");
    assert_eq!(err.as_response_error().status_code(), 401);
}

#[actix_web::test]
async fn test_health_needs_no_token() {
    let app = init_app!(Arc::new(StaticBackend::new()));

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}
