//! # Registry — The Operation Facade
//!
//! The only component external collaborators call. Each operation runs as
//! one indivisible step: caller authorization, argument and state
//! validation, then mutation of every structure the write touches (land
//! store, history log, owner index) and delivery of the event.
//!
//! ## Atomicity
//!
//! Every failure condition of an operation is checked before its first
//! mutation. A returned error therefore means no partial state is visible
//! to any subsequent read. There is nothing to roll back because nothing
//! was written.
//!
//! ## Ordering
//!
//! All mutating methods take `&mut self`. Concurrent submissions are
//! serialized by the layer that orders and commits operations; given that
//! serial order, the registry applies each operation fully before the next
//! is considered.

use serde::{Deserialize, Serialize};

use cadastre_core::{AccountId, LandId, RegistryError, Timestamp};

use crate::access::AccessController;
use crate::event::{EventSink, NullSink, RegistryEvent};
use crate::history::{HistoryLog, OwnershipRecord};
use crate::index::OwnerIndex;
use crate::store::{Land, LandStore};

const OP_REGISTER_LAND: &str = "register_land";
const OP_VERIFY_LAND: &str = "verify_land";
const OP_TRANSFER_OWNERSHIP: &str = "transfer_ownership";
const OP_TRANSFER_ADMIN: &str = "transfer_admin";
const OP_GET_LAND_DETAILS: &str = "get_land_details";
const OP_GET_OWNERSHIP_HISTORY: &str = "get_ownership_history";
const OP_IS_OWNER: &str = "is_owner";

/// What happens to the verification flag when title changes hands.
///
/// Deployments differ on whether an admin attestation binds the parcel or
/// the owner. The choice is explicit configuration rather than a buried
/// assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerificationPolicy {
    /// Verification is revoked by a transfer; the new owner's claim must
    /// be re-attested before the parcel can be transferred again. This is
    /// the reference behavior.
    #[default]
    ResetOnTransfer,
    /// Verification survives a transfer; the appended history record
    /// carries `verified_at_time = true`.
    CarryAcrossTransfer,
}

/// The title-ledger service.
///
/// One explicit value owns all ledger state; there is no ambient global.
/// Construct it with the deploying identity as initial admin:
///
/// ```
/// use cadastre_core::AccountId;
/// use cadastre_registry::Registry;
///
/// let admin = AccountId::new();
/// let registry = Registry::new(admin);
/// assert_eq!(registry.admin(), admin);
/// ```
#[derive(Debug)]
pub struct Registry<S: EventSink = NullSink> {
    access: AccessController,
    store: LandStore,
    index: OwnerIndex,
    history: HistoryLog,
    policy: VerificationPolicy,
    sink: S,
}

impl Registry<NullSink> {
    /// Create a registry with the given initial administrator and no
    /// event observer.
    pub fn new(admin: AccountId) -> Self {
        Self::with_sink(admin, NullSink)
    }
}

impl<S: EventSink> Registry<S> {
    /// Create a registry that delivers committed-write events to `sink`.
    pub fn with_sink(admin: AccountId, sink: S) -> Self {
        Self {
            access: AccessController::new(admin),
            store: LandStore::new(),
            index: OwnerIndex::new(),
            history: HistoryLog::new(),
            policy: VerificationPolicy::default(),
            sink,
        }
    }

    /// Replace the verification policy. Intended for construction time:
    /// `Registry::new(admin).with_policy(policy)`.
    pub fn with_policy(mut self, policy: VerificationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The current administrator identity.
    pub fn admin(&self) -> AccountId {
        self.access.admin()
    }

    /// The configured verification policy.
    pub fn policy(&self) -> VerificationPolicy {
        self.policy
    }

    /// The event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    // ─── Write operations ───────────────────────────────────────────

    /// Register a new parcel. Admin-only.
    ///
    /// Creates the land record unverified, appends the first ownership
    /// record, indexes the parcel under its owner, and emits
    /// [`RegistryEvent::LandRegistered`].
    pub fn register_land(
        &mut self,
        caller: AccountId,
        id: LandId,
        owner: AccountId,
        size_sq_ft: u64,
        location: String,
        title_number: String,
    ) -> Result<(), RegistryError> {
        self.access.require_admin(caller, OP_REGISTER_LAND)?;
        if owner.is_nil() {
            return Err(RegistryError::InvalidArgument {
                operation: OP_REGISTER_LAND,
                reason: "owner must not be the nil identity".to_string(),
            });
        }
        if self.store.contains(id) {
            return Err(RegistryError::StateConflict {
                operation: OP_REGISTER_LAND,
                land_id: id.to_string(),
                reason: "land id is already registered".to_string(),
            });
        }

        let now = Timestamp::now();
        self.store.insert(
            Land {
                id,
                owner,
                size_sq_ft,
                location,
                title_number,
                verified: false,
                registered_at: now,
            },
            OP_REGISTER_LAND,
        )?;
        self.history.append(
            id,
            OwnershipRecord {
                owner,
                timestamp: now,
                verified_at_time: false,
            },
        );
        self.index.insert(owner, id);
        self.sink.emit(RegistryEvent::LandRegistered { id, owner, at: now });
        tracing::info!(land = %id, owner = %owner, "land registered");
        Ok(())
    }

    /// Attest the current ownership claim of a parcel. Admin-only.
    ///
    /// Flips the parcel's verification flag and amends the most recent
    /// history record in place; no new record is appended. Verifying an
    /// already-verified parcel is a state conflict.
    pub fn verify_land(&mut self, caller: AccountId, id: LandId) -> Result<(), RegistryError> {
        self.access.require_admin(caller, OP_VERIFY_LAND)?;
        let land = self.store.get(id).ok_or_else(|| RegistryError::NotFound {
            operation: OP_VERIFY_LAND,
            land_id: id.to_string(),
        })?;
        if land.verified {
            return Err(RegistryError::StateConflict {
                operation: OP_VERIFY_LAND,
                land_id: id.to_string(),
                reason: "land is already verified".to_string(),
            });
        }
        let owner = land.owner;

        self.store.mark_verified(id, OP_VERIFY_LAND)?;
        self.history.mark_last_verified(id, OP_VERIFY_LAND)?;
        self.sink.emit(RegistryEvent::LandVerified {
            id,
            owner,
            at: Timestamp::now(),
        });
        tracing::info!(land = %id, owner = %owner, "land verified");
        Ok(())
    }

    /// Transfer title to a verified parcel. Current-owner-only.
    ///
    /// Reassigns ownership, applies the verification policy, moves the
    /// parcel between owner-index sets, appends a new ownership record,
    /// and emits [`RegistryEvent::OwnershipTransferred`].
    pub fn transfer_ownership(
        &mut self,
        caller: AccountId,
        id: LandId,
        new_owner: AccountId,
    ) -> Result<(), RegistryError> {
        let land = self.store.get(id).ok_or_else(|| RegistryError::NotFound {
            operation: OP_TRANSFER_OWNERSHIP,
            land_id: id.to_string(),
        })?;
        self.access.require_owner(caller, land, OP_TRANSFER_OWNERSHIP)?;
        if !land.verified {
            return Err(RegistryError::StateConflict {
                operation: OP_TRANSFER_OWNERSHIP,
                land_id: id.to_string(),
                reason: "land is not verified; transfer requires prior verification".to_string(),
            });
        }
        if new_owner.is_nil() {
            return Err(RegistryError::InvalidArgument {
                operation: OP_TRANSFER_OWNERSHIP,
                reason: "new owner must not be the nil identity".to_string(),
            });
        }
        if new_owner == land.owner {
            return Err(RegistryError::InvalidArgument {
                operation: OP_TRANSFER_OWNERSHIP,
                reason: format!("new owner already holds title to {id}"),
            });
        }

        let verified_after = match self.policy {
            VerificationPolicy::ResetOnTransfer => false,
            VerificationPolicy::CarryAcrossTransfer => true,
        };
        let now = Timestamp::now();
        let old_owner = self
            .store
            .reassign(id, new_owner, verified_after, OP_TRANSFER_OWNERSHIP)?;
        self.index.remove(old_owner, id);
        self.index.insert(new_owner, id);
        self.history.append(
            id,
            OwnershipRecord {
                owner: new_owner,
                timestamp: now,
                verified_at_time: verified_after,
            },
        );
        self.sink.emit(RegistryEvent::OwnershipTransferred {
            id,
            from: old_owner,
            to: new_owner,
            at: now,
        });
        tracing::info!(land = %id, from = %old_owner, to = %new_owner, "ownership transferred");
        Ok(())
    }

    /// Replace the administrator identity. Admin-only; the nil identity is
    /// rejected.
    pub fn transfer_admin(
        &mut self,
        caller: AccountId,
        new_admin: AccountId,
    ) -> Result<(), RegistryError> {
        let previous = self.access.admin();
        self.access.set_admin(caller, new_admin, OP_TRANSFER_ADMIN)?;
        tracing::info!(previous = %previous, new = %new_admin, "admin transferred");
        Ok(())
    }

    // ─── Read operations ────────────────────────────────────────────

    /// A full snapshot of a parcel record.
    pub fn get_land_details(&self, id: LandId) -> Result<Land, RegistryError> {
        self.store
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                operation: OP_GET_LAND_DETAILS,
                land_id: id.to_string(),
            })
    }

    /// The ordered ownership history of a parcel, oldest first.
    pub fn get_ownership_history(&self, id: LandId) -> Result<&[OwnershipRecord], RegistryError> {
        self.history
            .records(id)
            .ok_or_else(|| RegistryError::NotFound {
                operation: OP_GET_OWNERSHIP_HISTORY,
                land_id: id.to_string(),
            })
    }

    /// The parcels currently held by an owner. Unordered; empty for
    /// unknown owners.
    pub fn get_owner_lands(&self, owner: AccountId) -> &[LandId] {
        self.index.lands_of(owner)
    }

    /// All registered parcel identifiers, in registration order.
    pub fn get_all_land_ids(&self) -> &[LandId] {
        self.store.ids()
    }

    /// Number of registered parcels.
    pub fn get_land_count(&self) -> usize {
        self.store.len()
    }

    /// Whether `account` currently holds title to the parcel.
    pub fn is_owner(&self, id: LandId, account: AccountId) -> Result<bool, RegistryError> {
        let land = self.store.get(id).ok_or_else(|| RegistryError::NotFound {
            operation: OP_IS_OWNER,
            land_id: id.to_string(),
        })?;
        Ok(land.owner == account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(
        registry: &mut Registry,
        admin: AccountId,
        id: u64,
        owner: AccountId,
    ) -> Result<(), RegistryError> {
        registry.register_land(
            admin,
            LandId(id),
            owner,
            1000,
            "10,20".to_string(),
            format!("T-{id}"),
        )
    }

    #[test]
    fn test_register_verify_transfer_happy_path() {
        let admin = AccountId::new();
        let alice = AccountId::new();
        let bob = AccountId::new();
        let mut registry = Registry::new(admin);

        register(&mut registry, admin, 1, alice).unwrap();
        registry.verify_land(admin, LandId(1)).unwrap();
        registry.transfer_ownership(alice, LandId(1), bob).unwrap();

        let land = registry.get_land_details(LandId(1)).unwrap();
        assert_eq!(land.owner, bob);
        assert!(!land.verified);
        assert!(registry.is_owner(LandId(1), bob).unwrap());
        assert!(!registry.is_owner(LandId(1), alice).unwrap());
    }

    #[test]
    fn test_carry_policy_keeps_verification_across_transfer() {
        let admin = AccountId::new();
        let alice = AccountId::new();
        let bob = AccountId::new();
        let carol = AccountId::new();
        let mut registry =
            Registry::new(admin).with_policy(VerificationPolicy::CarryAcrossTransfer);

        register(&mut registry, admin, 1, alice).unwrap();
        registry.verify_land(admin, LandId(1)).unwrap();
        registry.transfer_ownership(alice, LandId(1), bob).unwrap();

        let land = registry.get_land_details(LandId(1)).unwrap();
        assert!(land.verified);
        let history = registry.get_ownership_history(LandId(1)).unwrap();
        assert!(history[1].verified_at_time);

        // No re-verification needed before the next transfer.
        registry.transfer_ownership(bob, LandId(1), carol).unwrap();
        assert_eq!(registry.get_land_details(LandId(1)).unwrap().owner, carol);
    }

    #[test]
    fn test_reset_policy_is_default() {
        let registry = Registry::new(AccountId::new());
        assert_eq!(registry.policy(), VerificationPolicy::ResetOnTransfer);
    }

    #[test]
    fn test_transfer_admin_hands_over_role() {
        let admin = AccountId::new();
        let next = AccountId::new();
        let owner = AccountId::new();
        let mut registry = Registry::new(admin);

        registry.transfer_admin(admin, next).unwrap();
        assert_eq!(registry.admin(), next);

        // The old admin can no longer register.
        let result = register(&mut registry, admin, 1, owner);
        assert!(matches!(result, Err(RegistryError::Authorization { .. })));
        register(&mut registry, next, 1, owner).unwrap();
    }

    #[test]
    fn test_register_rejects_nil_owner() {
        let admin = AccountId::new();
        let mut registry = Registry::new(admin);
        let result = register(&mut registry, admin, 1, AccountId::nil());
        assert!(matches!(result, Err(RegistryError::InvalidArgument { .. })));
        assert_eq!(registry.get_land_count(), 0);
    }

    #[test]
    fn test_transfer_rejects_self_and_nil() {
        let admin = AccountId::new();
        let alice = AccountId::new();
        let mut registry = Registry::new(admin);
        register(&mut registry, admin, 1, alice).unwrap();
        registry.verify_land(admin, LandId(1)).unwrap();

        let result = registry.transfer_ownership(alice, LandId(1), alice);
        assert!(matches!(result, Err(RegistryError::InvalidArgument { .. })));
        let result = registry.transfer_ownership(alice, LandId(1), AccountId::nil());
        assert!(matches!(result, Err(RegistryError::InvalidArgument { .. })));

        // Rejections left the parcel verified and owned by alice.
        let land = registry.get_land_details(LandId(1)).unwrap();
        assert_eq!(land.owner, alice);
        assert!(land.verified);
    }

    #[test]
    fn test_reads_on_unknown_parcel() {
        let registry = Registry::new(AccountId::new());
        assert!(matches!(
            registry.get_land_details(LandId(1)),
            Err(RegistryError::NotFound { .. })
        ));
        assert!(matches!(
            registry.get_ownership_history(LandId(1)),
            Err(RegistryError::NotFound { .. })
        ));
        assert!(matches!(
            registry.is_owner(LandId(1), AccountId::new()),
            Err(RegistryError::NotFound { .. })
        ));
    }
}
