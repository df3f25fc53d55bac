use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::constants::{ERR_EMPTY_USER_ID, ERR_EMPTY_WORKSPACE_ID};
use crate::error::Result;
use crate::routes::validation::validate_identifier;
use crate::{store, AppState};

#[derive(Debug, Deserialize)]
pub struct GrantMembershipRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "workspaceId")]
    pub workspace_id: String,
}

#[derive(Debug, Serialize)]
pub struct GrantMembershipResponse {
    pub success: bool,
}

/// Record a workspace membership
///
/// Membership is what authorizes shared template writes; the surrounding
/// application's team management calls this when a user joins a workspace.
/// Idempotent.
pub async fn grant_membership(
    State(state): State<AppState>,
    Json(payload): Json<GrantMembershipRequest>,
) -> Result<Json<GrantMembershipResponse>> {
    validate_identifier(&payload.user_id, ERR_EMPTY_USER_ID)?;
    validate_identifier(&payload.workspace_id, ERR_EMPTY_WORKSPACE_ID)?;

    let db = state.db.clone();
    tokio::task::spawn_blocking(move || {
        store::grant_membership(&db, &payload.user_id, &payload.workspace_id)
    })
    .await??;

    Ok(Json(GrantMembershipResponse { success: true }))
}
