mod financials;
mod wallet_record;

pub use financials::AggregateFinancials;
pub use wallet_record::{Commissions, NormalizedWallets, WalletRecord};
