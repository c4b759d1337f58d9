pub mod backend;
pub mod charts;
pub mod dashboard;
pub mod health;
pub mod performance;
pub mod wallets;
