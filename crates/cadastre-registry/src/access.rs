//! # Access Controller
//!
//! Holds the single administrator identity and answers the two role
//! questions the ledger asks: "is the caller the admin" and "is the caller
//! the current owner of this parcel".
//!
//! Authorization is a flat capability check composed as a guard clause at
//! the top of each mutating operation. There is no role hierarchy.

use cadastre_core::{AccountId, RegistryError};

use crate::store::Land;

/// The authorization component of the ledger.
///
/// Exactly one identity holds the administrator role at any time. The role
/// is reassigned only through [`AccessController::set_admin`], and the
/// registry is never left without an admin.
#[derive(Debug, Clone)]
pub struct AccessController {
    admin: AccountId,
}

impl AccessController {
    /// Create a controller with the given initial administrator.
    pub fn new(admin: AccountId) -> Self {
        Self { admin }
    }

    /// The current administrator identity.
    pub fn admin(&self) -> AccountId {
        self.admin
    }

    /// Whether the caller holds the administrator role.
    pub fn is_admin(&self, caller: AccountId) -> bool {
        caller == self.admin
    }

    /// Reject the call unless the caller is the administrator.
    pub fn require_admin(
        &self,
        caller: AccountId,
        operation: &'static str,
    ) -> Result<(), RegistryError> {
        if self.is_admin(caller) {
            Ok(())
        } else {
            Err(RegistryError::Authorization {
                operation,
                caller: caller.to_string(),
                reason: "administrator role required".to_string(),
            })
        }
    }

    /// Reject the call unless the caller is the current owner of `land`.
    pub fn require_owner(
        &self,
        caller: AccountId,
        land: &Land,
        operation: &'static str,
    ) -> Result<(), RegistryError> {
        if caller == land.owner {
            Ok(())
        } else {
            Err(RegistryError::Authorization {
                operation,
                caller: caller.to_string(),
                reason: format!("caller does not hold title to {}", land.id),
            })
        }
    }

    /// Replace the administrator identity.
    ///
    /// Admin-only. The nil identity is rejected, so the registry can never
    /// lose its administrator.
    pub fn set_admin(
        &mut self,
        caller: AccountId,
        new_admin: AccountId,
        operation: &'static str,
    ) -> Result<(), RegistryError> {
        self.require_admin(caller, operation)?;
        if new_admin.is_nil() {
            return Err(RegistryError::InvalidArgument {
                operation,
                reason: "new admin must not be the nil identity".to_string(),
            });
        }
        self.admin = new_admin;
        Ok(())
    }
}
