use rust_decimal::Decimal;
use tracing::warn;

use crate::modules::wallets::models::{AggregateFinancials, Commissions, WalletRecord};

/// Fold wallet records into dashboard totals.
///
/// Each record contributes `balance`, else `mainWallet`, else zero, and its
/// commission sub-totals (zero when missing). Sums are exact decimals, so
/// within the decimal range the result does not depend on record order. A
/// total that would overflow saturates at the range bound. An empty slice
/// yields all zeros.
pub fn aggregate_wallets(records: &[WalletRecord]) -> AggregateFinancials {
    let mut main_wallet = Decimal::ZERO;
    let mut commissions = Commissions::default();

    for record in records {
        accumulate(&mut main_wallet, record.resolved_balance(), "mainWallet");

        let c = record.commissions_or_zero();
        accumulate(&mut commissions.sales, c.sales, "sales");
        accumulate(&mut commissions.delivery, c.delivery, "delivery");
        accumulate(&mut commissions.subscriptions, c.subscriptions, "subscriptions");
    }

    AggregateFinancials {
        main_wallet,
        commissions,
    }
}

fn accumulate(total: &mut Decimal, amount: Decimal, field: &'static str) {
    *total = total.checked_add(amount).unwrap_or_else(|| {
        warn!(field, amount = %amount, "Wallet total overflowed, saturating");
        if amount.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    });
}
