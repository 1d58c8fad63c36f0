//! # Error Types — Ledger Error Taxonomy
//!
//! Defines the error type returned by every fallible ledger operation.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Contract
//!
//! Every error is detected before the first mutation of an operation. A
//! returned error therefore implies that the operation had zero side
//! effects. Each variant names the operation that rejected the call and
//! carries enough context for the submission layer to decide remediation.
//! The ledger never retries internally.

use thiserror::Error;

/// Errors returned by title-ledger operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The caller lacks the role the operation requires.
    #[error("{operation}: caller {caller} is not authorized: {reason}")]
    Authorization {
        /// The public operation that rejected the call.
        operation: &'static str,
        /// The caller identity presented.
        caller: String,
        /// Why the caller was rejected.
        reason: String,
    },

    /// The referenced land id is not registered.
    #[error("{operation}: {land_id} is not registered")]
    NotFound {
        /// The public operation that rejected the call.
        operation: &'static str,
        /// The unknown land identifier.
        land_id: String,
    },

    /// The operation conflicts with the current state of the record:
    /// a duplicate registration, a repeated verification, or a transfer
    /// of an unverified parcel.
    #[error("{operation}: {land_id}: {reason}")]
    StateConflict {
        /// The public operation that rejected the call.
        operation: &'static str,
        /// The land identifier in conflict.
        land_id: String,
        /// The conflicting condition.
        reason: String,
    },

    /// An argument failed validation: a null identity, or a transfer to
    /// the current owner.
    #[error("{operation}: {reason}")]
    InvalidArgument {
        /// The public operation that rejected the call.
        operation: &'static str,
        /// The validation failure.
        reason: String,
    },
}
