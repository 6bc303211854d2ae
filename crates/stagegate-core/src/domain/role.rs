//! Roles: the matrix rows plus the privileged `super-admin`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ParseRoleError;

/// A pipeline participant.
///
/// Every variant except [`Role::SuperAdmin`] owns exactly one row of the
/// matrix. `SuperAdmin` owns no row and may act on all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    AlphaSales,
    AlphaSsc,
    EsporaStrategy,
    EsporaDiffusion,
    EsporaProduction,
    EsporaManagement,
    EsporaAccompaniment,
    TestankStudies,
    SuperAdmin,
}

impl Role {
    /// Row owners in display order (top to bottom).
    pub const ROWS: [Role; 8] = [
        Role::AlphaSales,
        Role::AlphaSsc,
        Role::EsporaStrategy,
        Role::EsporaDiffusion,
        Role::EsporaProduction,
        Role::EsporaManagement,
        Role::EsporaAccompaniment,
        Role::TestankStudies,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::AlphaSales => "alpha-sales",
            Role::AlphaSsc => "alpha-ssc",
            Role::EsporaStrategy => "espora-strategy",
            Role::EsporaDiffusion => "espora-diffusion",
            Role::EsporaProduction => "espora-production",
            Role::EsporaManagement => "espora-management",
            Role::EsporaAccompaniment => "espora-accompaniment",
            Role::TestankStudies => "testank-studies",
            Role::SuperAdmin => "super-admin",
        }
    }

    /// Row label shown next to the matrix.
    pub const fn label(self) -> &'static str {
        match self {
            Role::AlphaSales => "Ventas",
            Role::AlphaSsc => "SSC",
            Role::EsporaStrategy => "Espora Estrategia",
            Role::EsporaDiffusion => "Espora Difusión",
            Role::EsporaProduction => "Espora Producción",
            Role::EsporaManagement => "Espora Gerencia",
            Role::EsporaAccompaniment => "Espora Acompañamiento",
            Role::TestankStudies => "Testank Estudios",
            Role::SuperAdmin => "Super Admin",
        }
    }

    /// Bypasses row ownership and dependency checks.
    pub const fn is_privileged(self) -> bool {
        matches!(self, Role::SuperAdmin)
    }

    pub const fn is_row_owner(self) -> bool {
        !self.is_privileged()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ROWS
            .into_iter()
            .chain(std::iter::once(Role::SuperAdmin))
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}
