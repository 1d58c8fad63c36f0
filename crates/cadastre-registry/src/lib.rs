//! # cadastre-registry — The Title-Ledger State Machine
//!
//! Records land parcels, gates who may attest ("verify") them, and governs
//! transfer of ownership, while preserving a permanent, append-only history
//! of every ownership event.
//!
//! ## Components
//!
//! - **AccessController** (`access.rs`): holds the single administrator
//!   identity; answers "is the caller the admin" and "is the caller the
//!   record's current owner".
//!
//! - **LandStore** (`store.rs`): primary store keyed by land identifier;
//!   owns the field-level mutation rules.
//!
//! - **OwnerIndex** (`index.rs`): secondary index from an owner identity to
//!   the set of parcels it currently holds; removal is O(1) swap-with-last.
//!
//! - **HistoryLog** (`history.rs`): append-only, per-parcel sequence of
//!   ownership events; past entries are never rewritten.
//!
//! - **Registry** (`registry.rs`): the operation facade external
//!   collaborators call. Each write either completes every step (store,
//!   history, index, event) or none.
//!
//! ## Execution Model
//!
//! The ledger is one totally-ordered state machine. Every mutating method
//! takes `&mut self`, so the borrow checker enforces the
//! single-writer-at-a-time contract in-process. An embedding that shares a
//! registry across threads must serialize mutating calls behind a single
//! ordering point, such as one mutex around the whole value or a
//! single-consumer command queue. The core contains no locking, no async,
//! no timeouts, and no retries.

pub mod access;
pub mod event;
pub mod history;
pub mod index;
pub mod registry;
pub mod store;

// ─── Re-exports ─────────────────────────────────────────────────────

pub use access::AccessController;
pub use event::{EventSink, NullSink, RecordingSink, RegistryEvent};
pub use history::{HistoryLog, OwnershipRecord};
pub use index::OwnerIndex;
pub use registry::{Registry, VerificationPolicy};
pub use store::{Land, LandStore};
