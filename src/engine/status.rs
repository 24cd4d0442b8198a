//! Point validity for a single selected day.

use chrono::NaiveDate;
use serde::Serialize;

use super::window::Window;

/// Whether points earned on a day can still be redeemed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointStatus {
    Valid,
    Expired,
}

impl PointStatus {
    pub fn as_num(&self) -> u8 {
        match self {
            PointStatus::Valid => 1,
            PointStatus::Expired => 0,
        }
    }
}

impl std::fmt::Display for PointStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointStatus::Valid => write!(f, "valid"),
            PointStatus::Expired => write!(f, "expired"),
        }
    }
}

/// `Valid` iff `selected` lies in the points window ending at `eff_today`.
/// A missing date is `Expired`.
pub fn compute_status(selected: Option<NaiveDate>, eff_today: NaiveDate) -> PointStatus {
    match selected {
        Some(date) if Window::points(eff_today).contains(date) => PointStatus::Valid,
        _ => PointStatus::Expired,
    }
}

/// Numeric form of [`compute_status`]: 1 for valid, 0 for expired.
pub fn compute_status_num(selected: Option<NaiveDate>, eff_today: NaiveDate) -> u8 {
    compute_status(selected, eff_today).as_num()
}
