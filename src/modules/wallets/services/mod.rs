mod aggregator;
mod normalizer;

pub use aggregator::aggregate_wallets;
pub use normalizer::{normalize_wallet_payload, WALLET_PAYLOAD_KEYS};
pub(crate) use normalizer::resolve_envelope;
