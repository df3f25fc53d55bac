use redb::{Database, ReadableTable};

use crate::db::{tables, BINCODE_CONFIG};
use crate::error::{AppError, Result};
use crate::models::{Template, TemplateRecord, UserRecord};

/// Fetch a template by its internal id
///
/// No visibility check at this layer: the id-based read carries the same
/// public-by-handle semantics as the token-based one.
pub fn get_template(db: &Database, id: u64) -> Result<Template> {
    let read_txn = db.begin_read()?;
    let templates = read_txn.open_table(tables::TEMPLATES)?;

    let record: TemplateRecord = templates
        .get(id)?
        .map(|bytes| bincode::serde::decode_from_slice(bytes.value(), BINCODE_CONFIG))
        .transpose()?
        .map(|(record, _)| record)
        .ok_or(AppError::TemplateNotFound)?;

    Ok(Template::from_record(id, record))
}

/// Fetch a template by its shareable external token
pub fn get_template_by_token(db: &Database, token: &str) -> Result<Template> {
    let read_txn = db.begin_read()?;
    let token_index = read_txn.open_table(tables::TOKEN_INDEX)?;

    let id = token_index
        .get(token)?
        .map(|v| v.value())
        .ok_or(AppError::TemplateNotFound)?;
    drop(token_index);

    let templates = read_txn.open_table(tables::TEMPLATES)?;
    let record: TemplateRecord = templates
        .get(id)?
        .map(|bytes| bincode::serde::decode_from_slice(bytes.value(), BINCODE_CONFIG))
        .transpose()?
        .map(|(record, _)| record)
        .ok_or(AppError::TemplateNotFound)?;

    Ok(Template::from_record(id, record))
}

/// Rewrite a template's subject and content
///
/// Category, author, workspace fields and the external token are immutable
/// after creation.
pub fn edit_template(db: &Database, id: u64, subject: String, content: String) -> Result<Template> {
    let write_txn = db.begin_write()?;
    let template = {
        let mut templates = write_txn.open_table(tables::TEMPLATES)?;

        let mut record: TemplateRecord = templates
            .get(id)?
            .map(|bytes| bincode::serde::decode_from_slice(bytes.value(), BINCODE_CONFIG))
            .transpose()?
            .map(|(record, _)| record)
            .ok_or(AppError::TemplateNotFound)?;

        record.subject = subject;
        record.content = content;

        let bytes = bincode::serde::encode_to_vec(&record, BINCODE_CONFIG)?;
        templates.insert(id, bytes.as_slice())?;

        Template::from_record(id, record)
    };
    write_txn.commit()?;

    tracing::info!("Template {} edited", id);

    Ok(template)
}

/// Delete a template and decrement its author's saved-template counter
///
/// Row removal, token-index removal, and the counter decrement commit in one
/// write transaction: a failure in between leaves both the row and the
/// counter in their pre-call state. The decrement clamps at zero so a
/// double-delete race cannot drive the counter negative. The lifetime
/// `total_emails` counter is untouched.
pub fn delete_template(db: &Database, id: u64) -> Result<()> {
    let write_txn = db.begin_write()?;
    {
        let mut templates = write_txn.open_table(tables::TEMPLATES)?;
        let record: TemplateRecord = templates
            .remove(id)?
            .map(|bytes| bincode::serde::decode_from_slice(bytes.value(), BINCODE_CONFIG))
            .transpose()?
            .map(|(record, _)| record)
            .ok_or(AppError::TemplateNotFound)?;
        drop(templates);

        let mut token_index = write_txn.open_table(tables::TOKEN_INDEX)?;
        token_index.remove(record.external_token.as_str())?;
        drop(token_index);

        let mut users = write_txn.open_table(tables::USERS)?;
        let author: Option<UserRecord> = users
            .get(record.author_id.as_str())?
            .map(|bytes| bincode::serde::decode_from_slice(bytes.value(), BINCODE_CONFIG))
            .transpose()?
            .map(|(user, _)| user);

        match author {
            Some(mut user) => {
                user.saved_emails = user.saved_emails.saturating_sub(1);
                let user_bytes = bincode::serde::encode_to_vec(&user, BINCODE_CONFIG)?;
                users.insert(record.author_id.as_str(), user_bytes.as_slice())?;
            }
            None => {
                // Row removal wins; a deleted author's ledger is not resurrected
                tracing::warn!(
                    "Template {} deleted but author {} has no user record",
                    id,
                    record.author_id
                );
            }
        }
    }
    write_txn.commit()?;

    tracing::info!("Template {} deleted", id);

    Ok(())
}
