use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Template record stored in redb
///
/// The internal id is the table key; it stays out of the record itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Opaque, globally unique token for public lookup (distinct from the id)
    pub external_token: String,
    /// Owning user
    pub author_id: String,
    /// Email subject line
    pub subject: String,
    /// Generated email body
    pub content: String,
    /// Free-form category tag
    pub category: String,
    /// Sharing workspace, if any
    pub workspace_id: Option<String>,
    /// True exactly when workspace_id is present
    pub is_public: bool,
    /// When the template was created (Unix timestamp)
    pub created_at: i64,
}

/// Template model for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: u64,
    pub external_token: String,
    pub author_id: String,
    pub subject: String,
    pub content: String,
    pub category: String,
    pub workspace_id: Option<String>,
    pub is_public: bool,
    /// RFC3339 creation time
    pub created_at: String,
}

impl Template {
    /// Build the API shape from a stored record and its table key
    pub fn from_record(id: u64, record: TemplateRecord) -> Self {
        let created_at = DateTime::from_timestamp(record.created_at, 0)
            .unwrap_or_else(Utc::now)
            .to_rfc3339();

        Self {
            id,
            external_token: record.external_token,
            author_id: record.author_id,
            subject: record.subject,
            content: record.content,
            category: record.category,
            workspace_id: record.workspace_id,
            is_public: record.is_public,
            created_at,
        }
    }
}
