//! Per-day aggregation.

use crate::domain::NormalizedDay;
use crate::engine::formulas::{balance_points, transaction_points, MIN_POINTS_BALANCE};

/// Smallest positive closing balance of the day, with the opening balance of
/// the same entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinBalance {
    pub final_balance: f64,
    pub init_balance: f64,
}

/// A day's totals, shared by every window that includes the day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyTotals {
    pub wear: f64,
    pub transaction: f64,
    pub used_pts: i64,
    pub gross_profit: f64,
    /// `None` when no entry closed with a positive balance.
    pub min_balance: Option<MinBalance>,
}

/// Points earned on a day before redemptions are deducted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EarnedPoints {
    pub balance: i64,
    pub transaction: i64,
}

impl DailyTotals {
    /// Fold a normalized day into totals.
    pub fn from_day(day: &NormalizedDay) -> Self {
        let mut totals = DailyTotals::default();

        for entry in &day.calc {
            totals.wear += entry.wear.max(0.0);
            if entry.transaction > 0.0 {
                totals.transaction += entry.transaction;
            }
            if entry.final_balance > 0.0 {
                let lower = totals
                    .min_balance
                    .map_or(true, |m| entry.final_balance < m.final_balance);
                if lower {
                    totals.min_balance = Some(MinBalance {
                        final_balance: entry.final_balance,
                        init_balance: entry.init_balance,
                    });
                }
            }
        }

        for entry in &day.uses {
            totals.gross_profit += entry.gross_profit();
            totals.used_pts = totals.used_pts.saturating_add(entry.used_pts);
        }

        totals
    }

    /// Balance and transaction points; both 0 unless the day's minimum
    /// balance reaches [`MIN_POINTS_BALANCE`].
    pub fn earned_points(&self) -> EarnedPoints {
        match self.min_balance {
            Some(min) if min.final_balance >= MIN_POINTS_BALANCE => EarnedPoints {
                balance: balance_points(min.final_balance),
                transaction: transaction_points(self.transaction),
            },
            _ => EarnedPoints::default(),
        }
    }

    /// Earned points minus redeemed points.
    pub fn net_points(&self) -> i64 {
        let earned = self.earned_points();
        earned
            .balance
            .saturating_add(earned.transaction)
            .saturating_sub(self.used_pts)
    }

    /// Gross profit minus wear.
    pub fn net_profit(&self) -> f64 {
        self.gross_profit - self.wear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalcEntry, Generation, UseEntry};

    fn calc(wear: f64, init_balance: f64, final_balance: f64, transaction: f64) -> CalcEntry {
        CalcEntry {
            wear,
            init_balance,
            final_balance,
            transaction,
        }
    }

    fn day(calc: Vec<CalcEntry>, uses: Vec<UseEntry>) -> NormalizedDay {
        NormalizedDay {
            generation: Generation::Split,
            calc,
            uses,
            fallback_token: None,
        }
    }

    #[test]
    fn test_negative_wear_and_transactions_dropped() {
        let totals = DailyTotals::from_day(&day(
            vec![
                calc(10.0, 0.0, 0.0, 50.0),
                calc(-4.0, 0.0, 0.0, -20.0),
                calc(2.5, 0.0, 0.0, 0.0),
            ],
            vec![],
        ));
        assert_eq!(totals.wear, 12.5);
        assert_eq!(totals.transaction, 50.0);
        assert_eq!(totals.min_balance, None);
    }

    #[test]
    fn test_min_balance_pairs_with_its_init_balance() {
        let totals = DailyTotals::from_day(&day(
            vec![
                calc(0.0, 1200.0, 1100.0, 0.0),
                calc(0.0, 800.0, 750.0, 0.0),
                calc(0.0, 50.0, 0.0, 0.0),
                calc(0.0, 900.0, 750.0, 0.0),
            ],
            vec![],
        ));
        assert_eq!(
            totals.min_balance,
            Some(MinBalance {
                final_balance: 750.0,
                init_balance: 800.0,
            })
        );
    }

    #[test]
    fn test_use_totals() {
        let totals = DailyTotals::from_day(&day(
            vec![],
            vec![
                UseEntry {
                    token_qty: 2.0,
                    token_val: 10.0,
                    used_pts: 1,
                    ..Default::default()
                },
                UseEntry {
                    token_qty: 5.0,
                    token_val: 10.0,
                    used_pts: 2,
                    profit_gross: Some(7.0),
                    ..Default::default()
                },
            ],
        ));
        assert_eq!(totals.gross_profit, 27.0);
        assert_eq!(totals.used_pts, 3);
    }

    #[test]
    fn test_points_require_balance_of_100() {
        let low = DailyTotals::from_day(&day(
            vec![calc(0.0, 0.0, 99.0, 300.0)],
            vec![UseEntry {
                used_pts: 2,
                ..Default::default()
            }],
        ));
        assert!(low.min_balance.is_some());
        assert_eq!(low.earned_points(), EarnedPoints::default());
        assert_eq!(low.net_points(), -2);

        let ok = DailyTotals::from_day(&day(vec![calc(0.0, 0.0, 5000.0, 300.0)], vec![]));
        assert_eq!(
            ok.earned_points(),
            EarnedPoints {
                balance: 2,
                transaction: 8,
            }
        );
        assert_eq!(ok.net_points(), 10);
    }

    #[test]
    fn test_net_profit() {
        let totals = DailyTotals {
            wear: 50.0,
            gross_profit: 20.0,
            ..Default::default()
        };
        assert_eq!(totals.net_profit(), -30.0);
    }
}
