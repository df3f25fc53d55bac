use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::constants::ERR_EMPTY_USER_ID;
use crate::error::Result;
use crate::models::UsageStatus;
use crate::routes::validation::validate_identifier;
use crate::{store, AppState};

#[derive(Debug, Deserialize)]
pub struct UsageParams {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Current usage counters and subscription for a user
///
/// Lets the caller display remaining quota and decide whether to prompt an
/// upgrade.
pub async fn get_usage(
    State(state): State<AppState>,
    Query(params): Query<UsageParams>,
) -> Result<Json<UsageStatus>> {
    validate_identifier(&params.user_id, ERR_EMPTY_USER_ID)?;

    let db = state.db.clone();
    let status =
        tokio::task::spawn_blocking(move || store::get_usage(&db, &params.user_id)).await??;

    Ok(Json(status))
}
