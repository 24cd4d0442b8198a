use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::{effective_today, parse_date_param, AppState};
use crate::engine::{compute_global_summary, compute_today_stats, Summary, TodayStats};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub today: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TodayQuery {
    pub date: Option<String>,
}

pub async fn get_summary(
    Query(params): Query<SummaryQuery>,
    State(state): State<AppState>,
) -> Result<Json<Summary>, AppError> {
    let eff_today = effective_today(parse_date_param("today", params.today.as_deref())?);
    let ledger = state.load_ledger().await?;

    Ok(Json(compute_global_summary(&ledger, eff_today)))
}

pub async fn get_today(
    Query(params): Query<TodayQuery>,
    State(state): State<AppState>,
) -> Result<Json<TodayStats>, AppError> {
    let date = effective_today(parse_date_param("date", params.date.as_deref())?);
    let ledger = state.load_ledger().await?;

    Ok(Json(compute_today_stats(&ledger, date)))
}
