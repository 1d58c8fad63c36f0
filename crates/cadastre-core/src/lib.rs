//! # cadastre-core — Foundational Types for the Cadastre Title Ledger
//!
//! This crate is the bedrock of the Cadastre workspace. It defines the
//! type-system primitives shared by every other crate: validated identity
//! newtypes, a UTC-only timestamp type, and the ledger error taxonomy.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `AccountId` and `LandId`
//!    are distinct types with their own constructors. No bare strings or
//!    integers cross an API boundary as identifiers.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC at
//!    seconds precision so that every recorded ownership event renders
//!    identically wherever it is read.
//!
//! 3. **One error taxonomy.** `RegistryError` is the single error type of
//!    the ledger. Every variant carries the operation name and enough
//!    context for a caller to decide remediation.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cadastre-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::RegistryError;
pub use identity::{AccountId, LandId};
pub use temporal::Timestamp;
