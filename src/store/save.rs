use chrono::Utc;
use redb::{Database, ReadableTable};

use crate::db::{tables, BINCODE_CONFIG};
use crate::error::{AppError, Result};
use crate::models::{Template, TemplateRecord, UserRecord};
use crate::token::generate_external_token;

/// Input to the save transaction
#[derive(Debug, Clone)]
pub struct NewTemplate {
    pub author_id: String,
    pub subject: String,
    pub content: String,
    pub category: String,
    pub workspace_id: Option<String>,
}

/// Persist a template and meter the author's quota in one atomic unit
///
/// Everything runs inside a single redb write transaction: the workspace
/// access check, the usage snapshot read, the quota gate, the template
/// insert, and the counter update. redb write transactions are single-writer
/// and serializable, so concurrent saves by the same user serialize here and
/// each attempt re-evaluates the quota against a consistent snapshot. Any
/// early return drops the transaction uncommitted, leaving zero side effects.
pub fn save_template(db: &Database, new: NewTemplate) -> Result<Template> {
    let now = Utc::now().timestamp();

    let write_txn = db.begin_write()?;
    let template = {
        // 1. Shared write requires membership in the target workspace
        if let Some(workspace_id) = &new.workspace_id {
            let members = write_txn.open_table(tables::WORKSPACE_MEMBERS)?;
            if members
                .get((new.author_id.as_str(), workspace_id.as_str()))?
                .is_none()
            {
                tracing::warn!(
                    "Workspace write denied: user {} is not a member of {}",
                    new.author_id,
                    workspace_id
                );
                return Err(AppError::AccessDenied);
            }
        }

        // 2. Load the usage snapshot
        let mut users = write_txn.open_table(tables::USERS)?;
        let mut user: UserRecord = match users.get(new.author_id.as_str())? {
            Some(bytes) => bincode::serde::decode_from_slice(bytes.value(), BINCODE_CONFIG)?.0,
            None => {
                tracing::warn!("Save attempt for non-existent user: {}", new.author_id);
                return Err(AppError::UserNotFound);
            }
        };

        // 3. Reject before any mutation when the ceiling is already latched
        let snapshot = user.usage_snapshot();
        if snapshot.is_exhausted() {
            return Err(AppError::QuotaExceeded {
                subscription: snapshot.subscription,
                total_emails: snapshot.total_emails,
            });
        }

        // 4. Fresh external token, regenerated on index collision
        let mut token_index = write_txn.open_table(tables::TOKEN_INDEX)?;
        let mut external_token = generate_external_token();
        while token_index.get(external_token.as_str())?.is_some() {
            external_token = generate_external_token();
        }

        // 5. Allocate the next internal id; ids are never reused, keeping
        // creation-order pagination stable across deletes
        let mut meta = write_txn.open_table(tables::META)?;
        let id = meta
            .get(tables::TEMPLATE_ID_SEQ)?
            .map(|v| v.value())
            .unwrap_or(0)
            + 1;
        meta.insert(tables::TEMPLATE_ID_SEQ, id)?;

        // 6. Insert the template row
        let is_public = new.workspace_id.is_some();
        let record = TemplateRecord {
            external_token: external_token.clone(),
            author_id: new.author_id.clone(),
            subject: new.subject,
            content: new.content,
            category: new.category,
            workspace_id: new.workspace_id,
            is_public,
            created_at: now,
        };

        let mut templates = write_txn.open_table(tables::TEMPLATES)?;
        let record_bytes = bincode::serde::encode_to_vec(&record, BINCODE_CONFIG)?;
        templates.insert(id, record_bytes.as_slice())?;
        token_index.insert(external_token.as_str(), id)?;

        // 7. Advance the ledger using the snapshot from step 2
        let transition = snapshot.next();
        user.total_emails = transition.new_total_emails;
        user.saved_emails += 1;
        user.max_capacity = transition.new_max_capacity;

        let user_bytes = bincode::serde::encode_to_vec(&user, BINCODE_CONFIG)?;
        users.insert(new.author_id.as_str(), user_bytes.as_slice())?;

        Template::from_record(id, record)
    };
    write_txn.commit()?;

    tracing::info!(
        "Template {} saved for user {}",
        template.id,
        template.author_id
    );

    Ok(template)
}
