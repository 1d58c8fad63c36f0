//! # Owner Index
//!
//! Secondary index from an owner identity to the set of parcels it
//! currently holds. Kept consistent with the primary store by the registry
//! on every registration and transfer.

use std::collections::HashMap;

use cadastre_core::{AccountId, LandId};

/// Owner identity to held-parcel lookup.
///
/// Each owner's set is a plain `Vec`. Removal uses swap-with-last
/// (`Vec::swap_remove`), which is O(1) and does not preserve the order of
/// the remaining entries. Callers must not rely on any ordering of
/// [`OwnerIndex::lands_of`].
#[derive(Debug, Clone, Default)]
pub struct OwnerIndex {
    by_owner: HashMap<AccountId, Vec<LandId>>,
}

impl OwnerIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parcel to an owner's set.
    ///
    /// Callers never insert the same (owner, id) pair twice; the index does
    /// not deduplicate.
    pub fn insert(&mut self, owner: AccountId, id: LandId) {
        self.by_owner.entry(owner).or_default().push(id);
    }

    /// Remove a parcel from an owner's set via swap-with-last.
    ///
    /// The caller's invariant guarantees the pair is present: the registry
    /// only removes under the owner it previously inserted under. The set's
    /// order is not preserved.
    pub fn remove(&mut self, owner: AccountId, id: LandId) {
        if let Some(set) = self.by_owner.get_mut(&owner) {
            if let Some(position) = set.iter().position(|held| *held == id) {
                set.swap_remove(position);
            }
            if set.is_empty() {
                self.by_owner.remove(&owner);
            }
        }
    }

    /// The parcels currently held by an owner. Empty for unknown owners.
    pub fn lands_of(&self, owner: AccountId) -> &[LandId] {
        self.by_owner.get(&owner).map(Vec::as_slice).unwrap_or(&[])
    }
}
