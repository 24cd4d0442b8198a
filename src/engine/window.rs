//! Rolling date windows ending at the effective day.

use chrono::{Days, NaiveDate};

/// Length of the points window: the effective day and 14 days before it.
pub const POINTS_WINDOW_DAYS: u64 = 15;

/// Length of the turnover/wear/profit window.
pub const TURNOVER_WINDOW_DAYS: u64 = 90;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    /// The `days`-long window whose last day is `end`.
    pub fn ending_at(end: NaiveDate, days: u64) -> Self {
        let start = end
            .checked_sub_days(Days::new(days.saturating_sub(1)))
            .unwrap_or(NaiveDate::MIN);
        Window { start, end }
    }

    /// Window in which earned points stay valid.
    pub fn points(eff_today: NaiveDate) -> Self {
        Self::ending_at(eff_today, POINTS_WINDOW_DAYS)
    }

    /// Window over which wear, turnover and profit are summed.
    pub fn turnover(eff_today: NaiveDate) -> Self {
        Self::ending_at(eff_today, TURNOVER_WINDOW_DAYS)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_points_window_is_fifteen_days_inclusive() {
        let window = Window::points(ymd(2024, 3, 15));
        assert_eq!(window.start, ymd(2024, 3, 1));
        assert!(window.contains(ymd(2024, 3, 1)));
        assert!(window.contains(ymd(2024, 3, 15)));
        assert!(!window.contains(ymd(2024, 2, 29)));
        assert!(!window.contains(ymd(2024, 3, 16)));
    }

    #[test]
    fn test_turnover_window_is_ninety_days_inclusive() {
        let window = Window::turnover(ymd(2024, 3, 31));
        assert_eq!(window.start, ymd(2024, 1, 2));
        assert!(window.contains(ymd(2024, 1, 2)));
        assert!(!window.contains(ymd(2024, 1, 1)));
    }

    #[test]
    fn test_window_near_min_date_saturates() {
        let window = Window::turnover(NaiveDate::MIN);
        assert_eq!(window.start, NaiveDate::MIN);
        assert!(window.contains(NaiveDate::MIN));
    }
}
