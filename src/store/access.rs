use redb::Database;

use crate::db::tables;
use crate::error::Result;

/// Check whether a user may write shared templates into a workspace
///
/// Pure read of the composite membership key; row existence is the whole
/// authorization model. The save transaction re-runs the same check against
/// its own write transaction (see `store::save`).
pub fn workspace_access(db: &Database, user_id: &str, workspace_id: &str) -> Result<bool> {
    let read_txn = db.begin_read()?;
    let members = read_txn.open_table(tables::WORKSPACE_MEMBERS)?;

    Ok(members.get((user_id, workspace_id))?.is_some())
}

/// Record a workspace membership
///
/// Memberships are created by the surrounding application (invites, team
/// management); this is the glue that lets them exist. Idempotent.
pub fn grant_membership(db: &Database, user_id: &str, workspace_id: &str) -> Result<()> {
    let write_txn = db.begin_write()?;
    {
        let mut members = write_txn.open_table(tables::WORKSPACE_MEMBERS)?;
        members.insert((user_id, workspace_id), ())?;
    }
    write_txn.commit()?;

    tracing::info!(
        "Workspace membership granted: user {} -> workspace {}",
        user_id,
        workspace_id
    );

    Ok(())
}
