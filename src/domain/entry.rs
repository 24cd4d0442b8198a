//! Canonical per-day entries produced by normalization.

use serde::Serialize;

/// Which historical record shape a day was stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    /// Separate `calc` and `use` arrays.
    Split,
    /// One `entries` array, each entry classified by `entryType`.
    Mixed,
    /// Scalar fields on the day object.
    Flat,
}

/// Balance and transaction activity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalcEntry {
    pub wear: f64,
    pub init_balance: f64,
    pub final_balance: f64,
    pub transaction: f64,
}

/// A token redemption.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UseEntry {
    /// Uppercased token name; empty when none was recorded.
    pub token_name: String,
    pub token_qty: f64,
    pub token_val: f64,
    pub used_pts: i64,
    /// Explicit gross profit, overriding `token_qty * token_val`.
    pub profit_gross: Option<f64>,
}

impl UseEntry {
    pub fn gross_profit(&self) -> f64 {
        self.profit_gross.unwrap_or(self.token_qty * self.token_val)
    }
}

/// A day's entries in canonical form.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDay {
    pub generation: Generation,
    pub calc: Vec<CalcEntry>,
    pub uses: Vec<UseEntry>,
    /// Token name of the day's most recent entry of any kind, shown when no
    /// redemption carries a name.
    pub fallback_token: Option<String>,
}
