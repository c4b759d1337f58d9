use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::Currency;
use crate::modules::backend::Role;
use crate::modules::charts::WeeklyChart;
use crate::modules::performance::RankedPerformanceEntry;
use crate::modules::wallets::AggregateFinancials;

/// Wallet totals plus display strings for the cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialsView {
    #[serde(flatten)]
    pub totals: AggregateFinancials,
    pub currency: Currency,
    pub display: FinancialsDisplay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialsDisplay {
    pub main_wallet: String,
    pub sales: String,
    pub delivery: String,
    pub subscriptions: String,
    pub total_commissions: String,
}

impl FinancialsView {
    pub fn new(totals: AggregateFinancials, currency: Currency) -> Self {
        let display = FinancialsDisplay {
            main_wallet: currency.format_amount(totals.main_wallet),
            sales: currency.format_amount(totals.commissions.sales),
            delivery: currency.format_amount(totals.commissions.delivery),
            subscriptions: currency.format_amount(totals.commissions.subscriptions),
            total_commissions: currency.format_amount(totals.total_commissions()),
        };

        Self {
            totals,
            currency,
            display,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardView {
    pub metric: String,
    pub entries: Vec<RankedPerformanceEntry>,
}

/// Everything a role's landing page shows.
///
/// Sections whose fetch failed are zeroed/empty and named in `degraded`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub role: Role,
    pub financials: FinancialsView,
    pub leaderboard: LeaderboardView,
    pub weekly_orders: WeeklyChart,
    pub degraded: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl DashboardOverview {
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}
