use serde::{Deserialize, Serialize};

use crate::constants::{FREE_TIER_TEMPLATE_LIMIT, PRO_TIER_TEMPLATE_LIMIT};
use crate::models::quota::UsageSnapshot;

/// Subscription tier governing the template creation ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Pro,
    Premium,
}

impl Tier {
    /// Lifetime creation ceiling for this tier, or None for unlimited tiers
    pub fn creation_limit(&self) -> Option<u32> {
        match self {
            Tier::Free => Some(FREE_TIER_TEMPLATE_LIMIT),
            Tier::Pro => Some(PRO_TIER_TEMPLATE_LIMIT),
            Tier::Premium => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Free => write!(f, "free"),
            Tier::Pro => write!(f, "pro"),
            Tier::Premium => write!(f, "premium"),
        }
    }
}

/// User record stored in redb
///
/// The counters here are authoritative (counters of record), mutated only by
/// the save/delete transactions and the tier-change reset. They are never
/// recomputed by scanning the templates table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Subscription tier
    pub subscription: Tier,
    /// Lifetime count of templates ever created; never decremented by delete
    pub total_emails: u32,
    /// Count of templates currently retained; +1 on save, -1 on delete
    pub saved_emails: u32,
    /// Sticky latch set when the tier ceiling is reached; cleared only by a
    /// tier change
    pub max_capacity: bool,
    /// When the user was created (Unix timestamp)
    pub created_at: i64,
}

impl UserRecord {
    /// Create a fresh user record with zeroed counters
    pub fn new(subscription: Tier, now: i64) -> Self {
        Self {
            subscription,
            total_emails: 0,
            saved_emails: 0,
            max_capacity: false,
            created_at: now,
        }
    }

    /// Snapshot of the fields the quota calculator reads
    pub fn usage_snapshot(&self) -> UsageSnapshot {
        UsageSnapshot {
            subscription: self.subscription,
            total_emails: self.total_emails,
            max_capacity: self.max_capacity,
        }
    }
}

/// Usage status for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStatus {
    pub subscription: Tier,
    pub total_emails: u32,
    pub saved_emails: u32,
    pub max_capacity: bool,
}

impl From<&UserRecord> for UsageStatus {
    fn from(record: &UserRecord) -> Self {
        Self {
            subscription: record.subscription,
            total_emails: record.total_emails,
            saved_emails: record.saved_emails,
            max_capacity: record.max_capacity,
        }
    }
}
