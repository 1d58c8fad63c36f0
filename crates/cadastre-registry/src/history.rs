//! # History Log
//!
//! The append-only audit trail of the ledger: for every parcel, the ordered
//! sequence of ownership events from first registration to the present.
//!
//! The log exposes exactly two mutations: appending a new record, and
//! flipping the verification flag on the most recent record. There is no
//! general editing surface; past entries are never rewritten, removed, or
//! reordered.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use cadastre_core::{AccountId, LandId, RegistryError, Timestamp};

/// One ownership event: who held the parcel, from when, and whether the
/// claim was verified while they held it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipRecord {
    /// The identity that took ownership.
    pub owner: AccountId,
    /// When ownership was taken.
    pub timestamp: Timestamp,
    /// Whether the claim was verified during this tenure.
    pub verified_at_time: bool,
}

/// Append-only, per-parcel sequences of ownership records.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: HashMap<LandId, Vec<OwnershipRecord>>,
}

impl HistoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of a parcel's sequence.
    pub fn append(&mut self, id: LandId, record: OwnershipRecord) {
        self.entries.entry(id).or_default().push(record);
    }

    /// Flip `verified_at_time` on the most recent record.
    ///
    /// This is the single permitted amendment of an existing entry, used
    /// when the admin attests the current ownership claim. No other field
    /// of any record can be changed after the fact.
    pub fn mark_last_verified(
        &mut self,
        id: LandId,
        operation: &'static str,
    ) -> Result<(), RegistryError> {
        let last = self
            .entries
            .get_mut(&id)
            .and_then(|records| records.last_mut())
            .ok_or_else(|| RegistryError::NotFound {
                operation,
                land_id: id.to_string(),
            })?;
        last.verified_at_time = true;
        Ok(())
    }

    /// The full ordered sequence for a parcel, oldest first.
    pub fn records(&self, id: LandId) -> Option<&[OwnershipRecord]> {
        self.entries.get(&id).map(Vec::as_slice)
    }
}
