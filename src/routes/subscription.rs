use axum::{extract::State, Json};
use serde::Deserialize;

use crate::constants::ERR_EMPTY_USER_ID;
use crate::error::Result;
use crate::models::{Tier, UsageStatus};
use crate::routes::validation::validate_identifier;
use crate::{store, AppState};

#[derive(Debug, Deserialize)]
pub struct TierChangeRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub subscription: Tier,
}

/// Subscription change hook, driven by the payment gateway
///
/// Resets the lifetime counter and clears the capacity latch unconditionally;
/// returns the fresh usage status.
pub async fn change_subscription(
    State(state): State<AppState>,
    Json(payload): Json<TierChangeRequest>,
) -> Result<Json<UsageStatus>> {
    validate_identifier(&payload.user_id, ERR_EMPTY_USER_ID)?;

    let db = state.db.clone();
    let status = tokio::task::spawn_blocking(move || {
        store::apply_tier_change(&db, &payload.user_id, payload.subscription)
    })
    .await??;

    Ok(Json(status))
}
