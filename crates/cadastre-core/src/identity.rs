//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the two identifier namespaces of the title ledger.
//! You cannot pass a `LandId` where an `AccountId` is expected; the
//! distinction is enforced by the type system, not by convention.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity of a caller: the administrator, a title holder, or any
/// other party interacting with the ledger.
///
/// Identities are authenticated out-of-band by the submission layer; the
/// ledger treats them as opaque. The nil UUID is the null identity and is
/// rejected wherever an owner or admin is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The null identity.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Whether this is the null identity.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "account:{}", self.0)
    }
}

/// The identifier of a land parcel.
///
/// Parcel numbers are assigned by the registering authority and are
/// immutable once a parcel is recorded. A number is used at most once
/// for the lifetime of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LandId(pub u64);

impl LandId {
    /// The raw parcel number.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for LandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "land:{}", self.0)
    }
}
