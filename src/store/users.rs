use chrono::Utc;
use redb::{Database, ReadableTable};

use crate::db::{tables, BINCODE_CONFIG};
use crate::error::{AppError, Result};
use crate::models::{Tier, UsageStatus, UserRecord};

/// Create a user with zeroed usage counters
///
/// In the full application the auth provider creates users; this is the
/// explicit registration seam for this service.
pub fn register_user(db: &Database, user_id: &str, subscription: Tier) -> Result<()> {
    let write_txn = db.begin_write()?;
    {
        let mut users = write_txn.open_table(tables::USERS)?;

        if users.get(user_id)?.is_some() {
            tracing::info!("User already exists: {}", user_id);
            return Err(AppError::UserAlreadyExists);
        }

        let record = UserRecord::new(subscription, Utc::now().timestamp());
        let bytes = bincode::serde::encode_to_vec(&record, BINCODE_CONFIG)?;
        users.insert(user_id, bytes.as_slice())?;
    }
    write_txn.commit()?;

    tracing::info!("New user registered: {} ({})", user_id, subscription);

    Ok(())
}

/// Read a user's usage counters and subscription
///
/// A missing user surfaces as a typed error, never as empty data.
pub fn get_usage(db: &Database, user_id: &str) -> Result<UsageStatus> {
    let read_txn = db.begin_read()?;
    let users = read_txn.open_table(tables::USERS)?;

    let record: UserRecord = users
        .get(user_id)?
        .map(|bytes| bincode::serde::decode_from_slice(bytes.value(), BINCODE_CONFIG))
        .transpose()?
        .map(|(record, _)| record)
        .ok_or(AppError::UserNotFound)?;

    Ok(UsageStatus::from(&record))
}

/// Apply a subscription change from the payment gateway
///
/// Resets the lifetime counter and clears the capacity latch unconditionally,
/// whatever the prior state. This is the designated way to unlock a user
/// after an upgrade. `saved_emails` and existing template rows are untouched.
pub fn apply_tier_change(db: &Database, user_id: &str, new_tier: Tier) -> Result<UsageStatus> {
    let write_txn = db.begin_write()?;
    let status = {
        let mut users = write_txn.open_table(tables::USERS)?;

        let mut record: UserRecord = users
            .get(user_id)?
            .map(|bytes| bincode::serde::decode_from_slice(bytes.value(), BINCODE_CONFIG))
            .transpose()?
            .map(|(record, _)| record)
            .ok_or(AppError::UserNotFound)?;

        record.subscription = new_tier;
        record.total_emails = 0;
        record.max_capacity = false;

        let bytes = bincode::serde::encode_to_vec(&record, BINCODE_CONFIG)?;
        users.insert(user_id, bytes.as_slice())?;

        UsageStatus::from(&record)
    };
    write_txn.commit()?;

    tracing::info!("Subscription changed for user {}: {}", user_id, new_tier);

    Ok(status)
}
