//! # Land Store
//!
//! The primary store of the ledger: every registered parcel, keyed by its
//! land identifier, plus the registration-ordered list of identifiers.
//!
//! The store owns the field-level mutation rules. A parcel is created once,
//! its `owner` changes only through [`LandStore::reassign`], its `verified`
//! flag only through [`LandStore::mark_verified`] and `reassign`, and no
//! parcel is ever deleted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use cadastre_core::{AccountId, LandId, RegistryError, Timestamp};

/// A land parcel record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Land {
    /// Unique parcel identifier, immutable once assigned.
    pub id: LandId,
    /// The identity currently holding title.
    pub owner: AccountId,
    /// Parcel size in square feet.
    pub size_sq_ft: u64,
    /// Free-form location description (e.g. coordinates).
    pub location: String,
    /// The paper title number backing the record.
    pub title_number: String,
    /// Whether the current ownership claim has been attested by the admin.
    pub verified: bool,
    /// When the parcel was first registered.
    pub registered_at: Timestamp,
}

/// Primary store: parcel map plus registration-ordered id list.
///
/// The map and the list are deliberately decoupled structures; every write
/// operation updates both in one step.
#[derive(Debug, Clone, Default)]
pub struct LandStore {
    lands: HashMap<LandId, Land>,
    ids: Vec<LandId>,
}

impl LandStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new parcel.
    ///
    /// Rejects a duplicate identifier with `StateConflict` before touching
    /// either structure.
    pub fn insert(&mut self, land: Land, operation: &'static str) -> Result<(), RegistryError> {
        if self.lands.contains_key(&land.id) {
            return Err(RegistryError::StateConflict {
                operation,
                land_id: land.id.to_string(),
                reason: "land id is already registered".to_string(),
            });
        }
        self.ids.push(land.id);
        self.lands.insert(land.id, land);
        Ok(())
    }

    /// Flip the verification flag of an unverified parcel.
    pub fn mark_verified(
        &mut self,
        id: LandId,
        operation: &'static str,
    ) -> Result<(), RegistryError> {
        let land = self.lands.get_mut(&id).ok_or_else(|| RegistryError::NotFound {
            operation,
            land_id: id.to_string(),
        })?;
        if land.verified {
            return Err(RegistryError::StateConflict {
                operation,
                land_id: id.to_string(),
                reason: "land is already verified".to_string(),
            });
        }
        land.verified = true;
        Ok(())
    }

    /// Reassign ownership of a parcel, setting the post-transfer
    /// verification flag, and return the previous owner.
    pub fn reassign(
        &mut self,
        id: LandId,
        new_owner: AccountId,
        verified_after: bool,
        operation: &'static str,
    ) -> Result<AccountId, RegistryError> {
        let land = self.lands.get_mut(&id).ok_or_else(|| RegistryError::NotFound {
            operation,
            land_id: id.to_string(),
        })?;
        let previous = land.owner;
        land.owner = new_owner;
        land.verified = verified_after;
        Ok(previous)
    }

    /// Look up a parcel.
    pub fn get(&self, id: LandId) -> Option<&Land> {
        self.lands.get(&id)
    }

    /// Whether a parcel is registered.
    pub fn contains(&self, id: LandId) -> bool {
        self.lands.contains_key(&id)
    }

    /// All registered identifiers, in registration order.
    pub fn ids(&self) -> &[LandId] {
        &self.ids
    }

    /// Number of registered parcels.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parcel(id: u64, owner: AccountId) -> Land {
        Land {
            id: LandId(id),
            owner,
            size_sq_ft: 500,
            location: "0,0".to_string(),
            title_number: format!("T-{id}"),
            verified: false,
            registered_at: Timestamp::now(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let owner = AccountId::new();
        let mut store = LandStore::new();
        store.insert(parcel(1, owner), "test_op").unwrap();

        let land = store.get(LandId(1)).unwrap();
        assert_eq!(land.owner, owner);
        assert!(!land.verified);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let mut store = LandStore::new();
        store.insert(parcel(1, AccountId::new()), "test_op").unwrap();

        let original_owner = store.get(LandId(1)).unwrap().owner;
        let result = store.insert(parcel(1, AccountId::new()), "test_op");
        assert!(matches!(result, Err(RegistryError::StateConflict { .. })));

        // The original record is untouched and not double-listed.
        assert_eq!(store.get(LandId(1)).unwrap().owner, original_owner);
        assert_eq!(store.ids(), &[LandId(1)]);
    }

    #[test]
    fn test_ids_preserve_registration_order() {
        let mut store = LandStore::new();
        for id in [3, 1, 2] {
            store.insert(parcel(id, AccountId::new()), "test_op").unwrap();
        }
        assert_eq!(store.ids(), &[LandId(3), LandId(1), LandId(2)]);
    }

    #[test]
    fn test_mark_verified() {
        let mut store = LandStore::new();
        store.insert(parcel(1, AccountId::new()), "test_op").unwrap();

        store.mark_verified(LandId(1), "test_op").unwrap();
        assert!(store.get(LandId(1)).unwrap().verified);

        let result = store.mark_verified(LandId(1), "test_op");
        assert!(matches!(result, Err(RegistryError::StateConflict { .. })));
    }

    #[test]
    fn test_mark_verified_unknown_id() {
        let mut store = LandStore::new();
        let result = store.mark_verified(LandId(9), "test_op");
        assert!(matches!(result, Err(RegistryError::NotFound { .. })));
    }

    #[test]
    fn test_reassign_returns_previous_owner() {
        let first = AccountId::new();
        let second = AccountId::new();
        let mut store = LandStore::new();
        store.insert(parcel(1, first), "test_op").unwrap();
        store.mark_verified(LandId(1), "test_op").unwrap();

        let previous = store.reassign(LandId(1), second, false, "test_op").unwrap();
        assert_eq!(previous, first);

        let land = store.get(LandId(1)).unwrap();
        assert_eq!(land.owner, second);
        assert!(!land.verified);
    }

    #[test]
    fn test_land_serde_roundtrip() {
        let land = parcel(5, AccountId::new());
        let json = serde_json::to_string(&land).unwrap();
        let parsed: Land = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, land);
    }
}
