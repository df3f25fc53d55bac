/// Lifetime template ceiling for the free tier
pub const FREE_TIER_TEMPLATE_LIMIT: u32 = 8;

/// Lifetime template ceiling for the pro tier
pub const PRO_TIER_TEMPLATE_LIMIT: u32 = 20;

/// Default number of templates per listing page
pub const DEFAULT_PAGE_SIZE: u64 = 8;

/// Category filter sentinel meaning "no category restriction"
pub const CATEGORY_ALL: &str = "All";

/// Length of generated external tokens (nanoid default)
pub const EXTERNAL_TOKEN_LEN: usize = 21;

/// Maximum length of user and workspace identifiers
pub const MAX_ID_LEN: usize = 128;

/// Maximum subject length in bytes
pub const MAX_SUBJECT_LEN: usize = 512;

/// Maximum category tag length in bytes
pub const MAX_CATEGORY_LEN: usize = 64;

/// Maximum template content size in bytes (256KB)
/// Generated cold emails are a few KB; this leaves ample headroom
pub const MAX_CONTENT_SIZE_BYTES: usize = 262_144;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a missing or empty user ID
pub const ERR_EMPTY_USER_ID: &str = "User ID must be a non-empty string";

/// Error message for a missing or empty workspace ID
pub const ERR_EMPTY_WORKSPACE_ID: &str = "Workspace ID must be a non-empty string";

/// Error message for an over-long identifier
pub const ERR_ID_TOO_LONG: &str = "Identifier exceeds maximum length";

/// Error message for an empty subject
pub const ERR_EMPTY_SUBJECT: &str = "Subject must not be empty";

/// Error message for an over-long subject
pub const ERR_SUBJECT_TOO_LONG: &str = "Subject exceeds maximum length";

/// Error message for empty content
pub const ERR_EMPTY_CONTENT: &str = "Content must not be empty";

/// Error message for oversized content
pub const ERR_CONTENT_TOO_LARGE: &str = "Content exceeds maximum allowed size";

/// Error message for an empty category tag
pub const ERR_EMPTY_CATEGORY: &str = "Category must not be empty";

/// Error message for an over-long category tag
pub const ERR_CATEGORY_TOO_LONG: &str = "Category exceeds maximum length";

/// Error message for a zero page number
pub const ERR_INVALID_PAGE: &str = "Page number must be at least 1";

/// Error message for a zero page size
pub const ERR_INVALID_PAGE_SIZE: &str = "Page size must be at least 1";
