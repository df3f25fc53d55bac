use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::constants::ERR_EMPTY_USER_ID;
use crate::error::Result;
use crate::models::Tier;
use crate::routes::validation::validate_identifier;
use crate::{store, AppState};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Defaults to the free tier when omitted
    #[serde(default)]
    pub subscription: Tier,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
}

/// Register a new user with zeroed usage counters
///
/// Returns 409 Conflict if the user ID already exists.
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    validate_identifier(&payload.user_id, ERR_EMPTY_USER_ID)?;

    let db = state.db.clone();
    tokio::task::spawn_blocking(move || {
        store::register_user(&db, &payload.user_id, payload.subscription)
    })
    .await??;

    Ok(Json(RegisterResponse { success: true }))
}
