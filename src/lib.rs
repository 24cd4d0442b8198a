pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;
pub mod store;

pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{DayRecord, Generation, Ledger};
pub use engine::{
    compute_global_summary, compute_status, compute_status_num, compute_today_stats, PointStatus,
    Summary, TodayStats,
};
pub use error::AppError;
pub use store::{LedgerStore, MemoryStore, StoreError};
