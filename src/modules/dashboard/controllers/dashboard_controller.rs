use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::core::{AppError, Result};
use crate::modules::backend::{Role, UserContext};
use crate::modules::charts::BucketingMode;
use crate::modules::dashboard::services::DashboardService;

/// Query parameters for the leaderboard endpoint
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    /// Counter to rank by (defaults to the configured metric)
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Query parameters for the weekly orders endpoint
#[derive(Debug, Deserialize)]
pub struct WeeklyOrdersQuery {
    /// `weekday` (default) or `date`
    #[serde(default)]
    pub mode: BucketingMode,
}

#[derive(Debug, Deserialize)]
pub struct OverviewQuery {
    #[serde(default)]
    pub metric: Option<String>,
}

fn parse_role(raw: &str) -> Result<Role> {
    raw.parse().map_err(AppError::not_found)
}

/// GET /dashboard/{role}/financials
pub async fn get_financials(
    service: web::Data<DashboardService>,
    user: web::ReqData<UserContext>,
    role: web::Path<String>,
) -> Result<HttpResponse> {
    let role = parse_role(&role)?;
    let view = service.financials(&user, role).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// GET /dashboard/{role}/leaderboard?metric=sales&limit=10
pub async fn get_leaderboard(
    service: web::Data<DashboardService>,
    user: web::ReqData<UserContext>,
    role: web::Path<String>,
    query: web::Query<LeaderboardQuery>,
) -> Result<HttpResponse> {
    let role = parse_role(&role)?;
    let metric = query
        .metric
        .as_deref()
        .unwrap_or(&service.settings().default_metric);

    let view = service.leaderboard(&user, role, metric, query.limit).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// GET /dashboard/{role}/orders/weekly?mode=weekday
pub async fn get_weekly_orders(
    service: web::Data<DashboardService>,
    user: web::ReqData<UserContext>,
    role: web::Path<String>,
    query: web::Query<WeeklyOrdersQuery>,
) -> Result<HttpResponse> {
    let role = parse_role(&role)?;
    let chart = service
        .weekly_orders(&user, role, Utc::now(), query.mode)
        .await?;
    Ok(HttpResponse::Ok().json(chart))
}

/// GET /dashboard/{role}/overview
pub async fn get_overview(
    service: web::Data<DashboardService>,
    user: web::ReqData<UserContext>,
    role: web::Path<String>,
    query: web::Query<OverviewQuery>,
) -> Result<HttpResponse> {
    let role = parse_role(&role)?;
    let metric = query
        .metric
        .as_deref()
        .unwrap_or(&service.settings().default_metric);

    let overview = service.overview(&user, role, metric, Utc::now()).await?;
    Ok(HttpResponse::Ok().json(overview))
}

/// Configure routes for the dashboard module
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dashboard/{role}")
            .route("/financials", web::get().to(get_financials))
            .route("/leaderboard", web::get().to(get_leaderboard))
            .route("/orders/weekly", web::get().to(get_weekly_orders))
            .route("/overview", web::get().to(get_overview)),
    );
}
