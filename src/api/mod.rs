pub mod data;
pub mod entry;
pub mod health;
pub mod stats;
pub mod status;

use crate::config::Config;
use crate::domain::{parse_date_key, Ledger};
use crate::error::AppError;
use crate::store::LedgerStore;
use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, warn};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LedgerStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn LedgerStore>, config: Config) -> Self {
        Self { store, config }
    }

    /// Load and parse the current ledger snapshot; an absent document is empty.
    pub async fn load_ledger(&self) -> Result<Ledger, AppError> {
        let Some(json) = self.store.load(&self.config.ledger_key).await? else {
            return Ok(Ledger::new());
        };

        let ledger = Ledger::from_json(&json)?;
        if !json.trim_start().starts_with('{') {
            warn!(
                key = %self.config.ledger_key,
                "Stored ledger is not a JSON object, treating as empty"
            );
        }

        let invalid = ledger.invalid_keys().count();
        if invalid > 0 {
            debug!(days = ledger.len(), invalid, "Skipping ledger days with invalid date keys");
        }
        Ok(ledger)
    }
}

/// Parse an optional `YYYY-M-D` query parameter. Empty counts as absent.
pub(crate) fn parse_date_param(
    name: &str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => parse_date_key(raw)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid {}: expected YYYY-M-D", name))),
    }
}

/// The effective day for window calculations: the given date or today's local date.
pub(crate) fn effective_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/api/data", get(data::get_data).post(data::replace_data))
        .route("/v1/summary", get(stats::get_summary))
        .route("/v1/today", get(stats::get_today))
        .route("/v1/status", get(status::get_status))
        .route("/v1/entry/preview", post(entry::preview_entry))
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}
