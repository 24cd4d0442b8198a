use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::{effective_today, parse_date_param};
use crate::domain::parse_date_key;
use crate::engine::{compute_status, PointStatus};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub date: Option<String>,
    pub today: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: PointStatus,
    pub status_num: u8,
}

/// Point validity of `date`. A missing or unparseable `date` is expired;
/// an unparseable `today` is rejected.
pub async fn get_status(
    Query(params): Query<StatusQuery>,
) -> Result<Json<StatusResponse>, AppError> {
    let eff_today = effective_today(parse_date_param("today", params.today.as_deref())?);
    let selected = params.date.as_deref().map(str::trim).and_then(parse_date_key);

    let status = compute_status(selected, eff_today);
    Ok(Json(StatusResponse {
        status,
        status_num: status.as_num(),
    }))
}
