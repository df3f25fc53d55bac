use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::constants::{CATEGORY_ALL, ERR_EMPTY_USER_ID, ERR_EMPTY_WORKSPACE_ID};
use crate::error::{AppError, Result};
use crate::models::Template;
use crate::routes::validation::{
    validate_category, validate_identifier, validate_page_params, validate_template_fields,
};
use crate::store::{self, NewTemplate, TemplatePage};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveTemplateRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub subject: String,
    pub content: String,
    pub category: String,
    #[serde(rename = "workspaceId")]
    pub workspace_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListTemplatesParams {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub page: Option<u64>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u64>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditTemplateRequest {
    pub subject: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteTemplateResponse {
    pub success: bool,
}

/// Save a template under the author's quota
///
/// The whole operation (workspace access check, quota gate, template insert,
/// counter update) commits atomically in the store layer; any rejection
/// leaves no partial state.
pub async fn save_template(
    State(state): State<AppState>,
    Json(payload): Json<SaveTemplateRequest>,
) -> Result<Json<Template>> {
    // A save must be attributable to an author
    if payload.user_id.is_empty() {
        return Err(AppError::IdentityRequired);
    }
    validate_identifier(&payload.user_id, ERR_EMPTY_USER_ID)?;
    validate_template_fields(&payload.subject, &payload.content)?;
    validate_category(&payload.category)?;
    if let Some(workspace_id) = &payload.workspace_id {
        validate_identifier(workspace_id, ERR_EMPTY_WORKSPACE_ID)?;
    }

    let db = state.db.clone();
    let template = tokio::task::spawn_blocking(move || {
        store::save_template(
            &db,
            NewTemplate {
                author_id: payload.user_id,
                subject: payload.subject,
                content: payload.content,
                category: payload.category,
                workspace_id: payload.workspace_id,
            },
        )
    })
    .await??;

    Ok(Json(template))
}

/// Paginated, filtered listing of a user's templates
///
/// An absent userId yields an empty page (anonymous callers see nothing);
/// an out-of-range page yields an empty item list with totals intact.
pub async fn list_templates(
    State(state): State<AppState>,
    Query(params): Query<ListTemplatesParams>,
) -> Result<Json<TemplatePage>> {
    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(state.config.default_page_size);
    validate_page_params(page, page_size)?;

    let category = params.category.unwrap_or_else(|| CATEGORY_ALL.to_string());

    let db = state.db.clone();
    let page_result = tokio::task::spawn_blocking(move || {
        store::list_templates(&db, params.user_id.as_deref(), page, page_size, &category)
    })
    .await??;

    Ok(Json(page_result))
}

/// Fetch a template by internal id
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Template>> {
    let db = state.db.clone();
    let template = tokio::task::spawn_blocking(move || store::get_template(&db, id)).await??;

    Ok(Json(template))
}

/// Fetch a template by its shareable external token
pub async fn get_template_by_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<Template>> {
    let db = state.db.clone();
    let template =
        tokio::task::spawn_blocking(move || store::get_template_by_token(&db, &token)).await??;

    Ok(Json(template))
}

/// Rewrite a template's subject and content
pub async fn edit_template(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<EditTemplateRequest>,
) -> Result<Json<Template>> {
    validate_template_fields(&payload.subject, &payload.content)?;

    let db = state.db.clone();
    let template = tokio::task::spawn_blocking(move || {
        store::edit_template(&db, id, payload.subject, payload.content)
    })
    .await??;

    Ok(Json(template))
}

/// Delete a template, decrementing the author's saved counter atomically
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteTemplateResponse>> {
    let db = state.db.clone();
    tokio::task::spawn_blocking(move || store::delete_template(&db, id)).await??;

    Ok(Json(DeleteTemplateResponse { success: true }))
}
