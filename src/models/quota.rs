use crate::models::Tier;

/// The usage fields the quota calculator reads, snapshotted from a UserRecord
/// inside the save transaction
#[derive(Debug, Clone, Copy)]
pub struct UsageSnapshot {
    pub subscription: Tier,
    pub total_emails: u32,
    pub max_capacity: bool,
}

/// Result of applying one successful save to a usage snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageTransition {
    pub new_total_emails: u32,
    pub new_max_capacity: bool,
}

impl UsageSnapshot {
    /// Whether the tier ceiling has already been reached
    ///
    /// This is the enforcement predicate: a save must be rejected before any
    /// mutation when this returns true. Unlimited tiers never exhaust,
    /// regardless of a latch left over from a previous tier.
    pub fn is_exhausted(&self) -> bool {
        self.max_capacity && self.subscription.creation_limit().is_some()
    }

    /// Compute the usage after one successful save
    ///
    /// The total always advances by one. The latch is monotonic: once true it
    /// stays true, and it becomes true when the new total reaches the tier
    /// ceiling. The transition never blocks the current save; it gates the
    /// next attempt via `is_exhausted`.
    pub fn next(&self) -> UsageTransition {
        let new_total_emails = self.total_emails + 1;
        let new_max_capacity = self.max_capacity
            || self
                .subscription
                .creation_limit()
                .is_some_and(|limit| new_total_emails >= limit);

        UsageTransition {
            new_total_emails,
            new_max_capacity,
        }
    }
}
