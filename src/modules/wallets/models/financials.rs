use rust_decimal::Decimal;
use serde::Serialize;

use super::wallet_record::{Commissions, NormalizedWallets};
use crate::modules::wallets::services::aggregate_wallets;

/// Rolled-up wallet figures shown on the dashboard cards.
/// Always recomputed from a full fetch, never patched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateFinancials {
    pub main_wallet: Decimal,
    pub commissions: Commissions,
}

impl AggregateFinancials {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of the three commission sub-totals
    pub fn total_commissions(&self) -> Decimal {
        self.commissions.total()
    }

    pub fn is_zero(&self) -> bool {
        self.main_wallet.is_zero() && self.total_commissions().is_zero()
    }
}

impl From<&NormalizedWallets> for AggregateFinancials {
    fn from(wallets: &NormalizedWallets) -> Self {
        aggregate_wallets(wallets.records())
    }
}

impl From<NormalizedWallets> for AggregateFinancials {
    fn from(wallets: NormalizedWallets) -> Self {
        Self::from(&wallets)
    }
}
