//! Calculators behind the single-entry form.
//!
//! Each derived value can be overridden by a manual input. An input counts as
//! supplied when present and non-empty; it is coerced leniently like any
//! other ledger field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::number::{coerce_opt_f64, parse_float_str, parse_int_str};
use crate::engine::formulas::{
    balance_points, transaction_points, MIN_POINTS_BALANCE, MIN_POINTS_TRANSACTION,
};

fn supplied(manual: Option<&str>) -> Option<&str> {
    manual.filter(|s| !s.is_empty())
}

/// Manual wear if supplied, else `init - final_balance`.
pub fn compute_wear(init: f64, final_balance: f64, manual: Option<&str>) -> f64 {
    match supplied(manual) {
        Some(wear) => parse_float_str(wear),
        None => init - final_balance,
    }
}

/// 0 below the minimum balance; otherwise manual points if supplied, else the tier.
pub fn compute_balance_pts(final_balance: f64, manual: Option<&str>) -> i64 {
    if final_balance < MIN_POINTS_BALANCE {
        return 0;
    }
    match supplied(manual) {
        Some(pts) => parse_int_str(pts),
        None => balance_points(final_balance),
    }
}

/// 0 below the minimum transaction; otherwise manual points if supplied, else `floor(log2(txn))`.
pub fn compute_txn_pts(txn: f64, manual: Option<&str>) -> i64 {
    if txn < MIN_POINTS_TRANSACTION {
        return 0;
    }
    match supplied(manual) {
        Some(pts) => parse_int_str(pts),
        None => transaction_points(txn),
    }
}

pub fn compute_profit_gross(qty: f64, val: f64) -> f64 {
    qty * val
}

/// Manual profit if supplied, else `profit_gross - wear`.
pub fn compute_profit_net(profit_gross: f64, wear: f64, manual: Option<&str>) -> f64 {
    match supplied(manual) {
        Some(profit) => parse_float_str(profit),
        None => profit_gross - wear,
    }
}

/// A draft entry as typed into the form. Numbers may arrive as strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub init_balance: Option<Value>,
    pub final_balance: Option<Value>,
    pub transaction: Option<Value>,
    pub token_qty: Option<Value>,
    pub token_val: Option<Value>,
    pub wear: Option<Value>,
    pub balance_pts: Option<Value>,
    pub txn_pts: Option<Value>,
    pub profit: Option<Value>,
}

fn manual_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Values derived from an [`EntryDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPreview {
    pub wear: f64,
    pub balance_pts: i64,
    pub txn_pts: i64,
    pub total_pts: i64,
    pub profit_gross: f64,
    pub profit_net: f64,
}

impl EntryDraft {
    pub fn preview(&self) -> EntryPreview {
        let init_balance = coerce_opt_f64(self.init_balance.as_ref());
        let final_balance = coerce_opt_f64(self.final_balance.as_ref());
        let transaction = coerce_opt_f64(self.transaction.as_ref());

        let wear = compute_wear(
            init_balance,
            final_balance,
            manual_text(self.wear.as_ref()).as_deref(),
        );
        let balance_pts = compute_balance_pts(
            final_balance,
            manual_text(self.balance_pts.as_ref()).as_deref(),
        );
        let txn_pts = compute_txn_pts(transaction, manual_text(self.txn_pts.as_ref()).as_deref());
        let profit_gross = compute_profit_gross(
            coerce_opt_f64(self.token_qty.as_ref()),
            coerce_opt_f64(self.token_val.as_ref()),
        );
        let profit_net = compute_profit_net(
            profit_gross,
            wear,
            manual_text(self.profit.as_ref()).as_deref(),
        );

        EntryPreview {
            wear,
            balance_pts,
            txn_pts,
            total_pts: balance_pts.saturating_add(txn_pts),
            profit_gross,
            profit_net,
        }
    }
}
