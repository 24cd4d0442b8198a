//! Ledger-wide summary and single-day statistics.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{format_date_key, Generation, Ledger};
use crate::engine::daily::DailyTotals;
use crate::engine::normalize::normalize;
use crate::engine::tokens::collect_tokens;
use crate::engine::window::Window;

/// Rolling totals as of an effective day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Wear over the turnover window.
    pub sum_wear: f64,
    /// Positive transactions over the turnover window.
    pub sum_txn: f64,
    /// Redemption gross profit over the turnover window.
    pub sum_profit_gross: f64,
    /// Gross profit minus wear over the turnover window.
    pub sum_profit_total: f64,
    /// Net points over the points window.
    pub sum_pts: i64,
    /// `sum_wear / sum_txn`, or 0 without turnover.
    pub wear_rate: f64,
}

/// Statistics for one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayStats {
    pub date_key: String,
    /// True when the ledger has no data for the day.
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<Generation>,
    /// Opening balance of the entry holding the minimum closing balance.
    pub init_balance: f64,
    /// Minimum positive closing balance, or 0.
    pub final_balance: f64,
    pub wear: f64,
    pub transaction: f64,
    pub used_pts: i64,
    pub balance_pts: i64,
    pub txn_pts: i64,
    pub total_pts: i64,
    pub profit_gross: f64,
    pub profit_net: f64,
    pub token_lines: Vec<String>,
}

/// Accumulate the points and turnover windows over the whole ledger.
///
/// Days whose key is not a valid date are skipped. Each day's totals are
/// computed once and feed both windows.
pub fn compute_global_summary(ledger: &Ledger, eff_today: NaiveDate) -> Summary {
    let points_window = Window::points(eff_today);
    let turnover_window = Window::turnover(eff_today);
    let mut summary = Summary::default();

    for (date, record) in ledger.dated_days() {
        let in_points = points_window.contains(date);
        let in_turnover = turnover_window.contains(date);
        if !in_points && !in_turnover {
            continue;
        }

        let totals = normalize(record)
            .map(|day| DailyTotals::from_day(&day))
            .unwrap_or_default();

        if in_turnover {
            summary.sum_wear += totals.wear;
            summary.sum_txn += totals.transaction;
            summary.sum_profit_gross += totals.gross_profit;
        }
        if in_points {
            summary.sum_pts = summary.sum_pts.saturating_add(totals.net_points());
        }
    }

    summary.sum_profit_total = summary.sum_profit_gross - summary.sum_wear;
    summary.wear_rate = if summary.sum_txn > 0.0 {
        summary.sum_wear / summary.sum_txn
    } else {
        0.0
    };

    summary
}

/// Statistics for `date`, looked up by calendar day.
pub fn compute_today_stats(ledger: &Ledger, date: NaiveDate) -> TodayStats {
    let date_key = format_date_key(date);
    let Some(day) = ledger.day(date).and_then(normalize) else {
        return TodayStats {
            date_key,
            empty: true,
            ..Default::default()
        };
    };

    let totals = DailyTotals::from_day(&day);
    let earned = totals.earned_points();
    let (init_balance, final_balance) = totals
        .min_balance
        .map_or((0.0, 0.0), |m| (m.init_balance, m.final_balance));

    TodayStats {
        date_key,
        empty: false,
        generation: Some(day.generation),
        init_balance,
        final_balance,
        wear: totals.wear,
        transaction: totals.transaction,
        used_pts: totals.used_pts,
        balance_pts: earned.balance,
        txn_pts: earned.transaction,
        total_pts: totals.net_points(),
        profit_gross: totals.gross_profit,
        profit_net: totals.net_profit(),
        token_lines: collect_tokens(&day.uses, day.fallback_token.as_deref()),
    }
}
