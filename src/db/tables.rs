use redb::TableDefinition;

/// Users table: user_id -> UserRecord (serialized)
/// Holds the authoritative usage counters alongside the subscription tier
pub const USERS: TableDefinition<&str, &[u8]> = TableDefinition::new("users");

/// Templates table: internal id (monotonic) -> TemplateRecord (serialized)
/// Keys are allocated from TEMPLATE_ID_SEQ and never reused, so iterating
/// in reverse key order is creation-order descending
pub const TEMPLATES: TableDefinition<u64, &[u8]> = TableDefinition::new("templates");

/// Token index: external_token -> template id
/// Secondary index for public lookup; also enforces token uniqueness
pub const TOKEN_INDEX: TableDefinition<&str, u64> = TableDefinition::new("token_index");

/// Workspace members: (user_id, workspace_id) -> ()
/// Row existence authorizes writing shared templates into that workspace
pub const WORKSPACE_MEMBERS: TableDefinition<(&str, &str), ()> =
    TableDefinition::new("workspace_members");

/// Metadata table for counters (template id sequence)
pub const META: TableDefinition<&str, u64> = TableDefinition::new("meta");

/// Meta key for the template id allocator
pub const TEMPLATE_ID_SEQ: &str = "template_id_seq";
