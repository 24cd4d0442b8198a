//! Pure aggregation engine over ledger snapshots.
//!
//! Nothing here performs I/O or keeps state between calls.

pub mod daily;
pub mod entry_form;
pub mod formulas;
pub mod normalize;
pub mod status;
pub mod summary;
pub mod tokens;
pub mod window;

pub use daily::{DailyTotals, EarnedPoints, MinBalance};
pub use entry_form::{
    compute_balance_pts, compute_profit_gross, compute_profit_net, compute_txn_pts, compute_wear,
    EntryDraft, EntryPreview,
};
pub use formulas::{balance_points, transaction_points};
pub use normalize::normalize;
pub use status::{compute_status, compute_status_num, PointStatus};
pub use summary::{compute_global_summary, compute_today_stats, Summary, TodayStats};
pub use tokens::{collect_tokens, MAX_TOKEN_LINES};
pub use window::Window;
