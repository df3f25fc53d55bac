//! Core persistence operations over the redb database
//!
//! Each function here is synchronous; route handlers run them on
//! `tokio::task::spawn_blocking`. The save path is the only operation with a
//! cross-record invariant (template row + usage counters move together) and
//! runs entirely inside one write transaction.

pub mod access;
pub mod listing;
pub mod save;
pub mod templates;
pub mod users;

pub use access::{grant_membership, workspace_access};
pub use listing::{list_templates, TemplatePage};
pub use save::{save_template, NewTemplate};
pub use templates::{delete_template, edit_template, get_template, get_template_by_token};
pub use users::{apply_tier_change, get_usage, register_user};
