pub mod models;
pub mod services;

pub use models::{AggregateFinancials, Commissions, NormalizedWallets, WalletRecord};
pub use services::{aggregate_wallets, normalize_wallet_payload};
