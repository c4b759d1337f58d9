use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use tracing::{info, warn};

use crate::core::{AppError, Currency, Result};
use crate::modules::backend::{DashboardBackend, DashboardResource, Role, UserContext};
use crate::modules::charts::{
    bucket_trailing_week_with_mode, parse_timestamped_records, BucketingMode, DailyBucket,
    WeeklyChart,
};
use crate::modules::dashboard::models::{DashboardOverview, FinancialsView, LeaderboardView};
use crate::modules::performance::models::metric_keys;
use crate::modules::performance::services::leaderboard;
use crate::modules::performance::parse_performance_entries;
use crate::modules::wallets::{normalize_wallet_payload, AggregateFinancials};

/// Display settings shared by every request
#[derive(Debug, Clone)]
pub struct DashboardSettings {
    pub currency: Currency,
    /// Offset the weekly chart's days are cut in
    pub chart_offset: FixedOffset,
    pub default_metric: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            currency: Currency::NGN,
            chart_offset: Utc.fix(),
            default_metric: metric_keys::SALES.to_string(),
        }
    }
}

/// Fetches raw payloads for a user and role and derives dashboard figures.
///
/// Holds no per-request state: every call refetches and recomputes.
pub struct DashboardService {
    backend: Arc<dyn DashboardBackend>,
    settings: DashboardSettings,
}

impl DashboardService {
    pub fn new(backend: Arc<dyn DashboardBackend>, settings: DashboardSettings) -> Self {
        Self { backend, settings }
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Wallet and commission totals for the role's teams/zones
    pub async fn financials(&self, user: &UserContext, role: Role) -> Result<FinancialsView> {
        let payload = self
            .backend
            .fetch(user, role, DashboardResource::Wallet)
            .await?;

        let normalized = normalize_wallet_payload(&payload);
        if normalized.is_empty() {
            warn!(role = %role, "Wallet payload empty, showing zero state");
        }

        let totals = AggregateFinancials::from(&normalized);
        info!(
            role = %role,
            records = normalized.records().len(),
            main_wallet = %totals.main_wallet,
            "Computed wallet totals"
        );

        Ok(FinancialsView::new(totals, self.settings.currency))
    }

    /// Team members ranked by `metric`, optionally cut to the first `limit`
    pub async fn leaderboard(
        &self,
        user: &UserContext,
        role: Role,
        metric: &str,
        limit: Option<usize>,
    ) -> Result<LeaderboardView> {
        let metric = validate_metric(metric)?;
        if limit == Some(0) {
            return Err(AppError::validation("limit must be greater than 0"));
        }

        let payload = self
            .backend
            .fetch(user, role, DashboardResource::Performance)
            .await?;

        let entries = parse_performance_entries(&payload);
        let ranked = leaderboard(entries, metric, limit);
        info!(role = %role, metric = %metric, entries = ranked.len(), "Ranked leaderboard");

        Ok(LeaderboardView {
            metric: metric.to_string(),
            entries: ranked,
        })
    }

    /// Submitted vs. effective orders over the 7 days ending at `reference_now`
    pub async fn weekly_orders(
        &self,
        user: &UserContext,
        role: Role,
        reference_now: DateTime<Utc>,
        mode: BucketingMode,
    ) -> Result<WeeklyChart> {
        let payload = self
            .backend
            .fetch(user, role, DashboardResource::Orders)
            .await?;

        let records = parse_timestamped_records(&payload);
        let local_now = reference_now.with_timezone(&self.settings.chart_offset);
        let chart = WeeklyChart::new(mode, bucket_trailing_week_with_mode(&records, &local_now, mode));

        info!(
            role = %role,
            records = records.len(),
            submitted = chart.total_submitted(),
            effective = chart.total_effective(),
            "Bucketed weekly orders"
        );

        Ok(chart)
    }

    /// All sections at once. A failing section degrades to its zero state
    /// instead of failing the page.
    pub async fn overview(
        &self,
        user: &UserContext,
        role: Role,
        metric: &str,
        reference_now: DateTime<Utc>,
    ) -> Result<DashboardOverview> {
        let metric = validate_metric(metric)?;
        let mode = BucketingMode::default();

        let (financials, leaderboard, weekly_orders) = tokio::join!(
            self.financials(user, role),
            self.leaderboard(user, role, metric, None),
            self.weekly_orders(user, role, reference_now, mode),
        );

        let mut degraded = Vec::new();

        let financials = financials.unwrap_or_else(|e| {
            warn!(role = %role, error = %e, "Wallet section degraded");
            degraded.push(DashboardResource::Wallet.to_string());
            FinancialsView::new(AggregateFinancials::zero(), self.settings.currency)
        });

        let leaderboard = leaderboard.unwrap_or_else(|e| {
            warn!(role = %role, error = %e, "Leaderboard section degraded");
            degraded.push(DashboardResource::Performance.to_string());
            LeaderboardView {
                metric: metric.to_string(),
                entries: Vec::new(),
            }
        });

        let weekly_orders = weekly_orders.unwrap_or_else(|e| {
            warn!(role = %role, error = %e, "Orders chart section degraded");
            degraded.push(DashboardResource::Orders.to_string());
            let local_now = reference_now.with_timezone(&self.settings.chart_offset);
            WeeklyChart::new(mode, empty_week(&local_now, mode))
        });

        Ok(DashboardOverview {
            role,
            financials,
            leaderboard,
            weekly_orders,
            degraded,
            generated_at: reference_now,
        })
    }
}

fn validate_metric(metric: &str) -> Result<&str> {
    let metric = metric.trim();
    if metric.is_empty() {
        return Err(AppError::validation("metric must not be empty"));
    }
    Ok(metric)
}

fn empty_week(local_now: &DateTime<FixedOffset>, mode: BucketingMode) -> Vec<DailyBucket> {
    bucket_trailing_week_with_mode(&[], local_now, mode)
}
