use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard portals, one per management role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    RegionalManager,
    StateManager,
    SalesManager,
    Agent,
    Bdm,
    Bd,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::RegionalManager,
        Role::StateManager,
        Role::SalesManager,
        Role::Agent,
        Role::Bdm,
        Role::Bd,
    ];

    /// Path segment used by the upstream backend and the dashboard routes
    pub fn slug(&self) -> &'static str {
        match self {
            Role::RegionalManager => "regional-manager",
            Role::StateManager => "state-manager",
            Role::SalesManager => "sales-manager",
            Role::Agent => "agent",
            Role::Bdm => "bdm",
            Role::Bd => "bd",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.slug() == wanted)
            .ok_or_else(|| format!("Unknown dashboard role: {}", s))
    }
}

/// Upstream resources a dashboard reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardResource {
    Wallet,
    Performance,
    Orders,
}

impl DashboardResource {
    pub fn segment(&self) -> &'static str {
        match self {
            DashboardResource::Wallet => "wallet",
            DashboardResource::Performance => "performance",
            DashboardResource::Orders => "orders",
        }
    }
}

impl fmt::Display for DashboardResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}
