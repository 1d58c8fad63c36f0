//! # Registry Events
//!
//! Events emitted on successful writes, observed by an external sink such
//! as an indexer or a UI. Rejected operations emit nothing.

use serde::{Deserialize, Serialize};

use cadastre_core::{AccountId, LandId, Timestamp};

/// An event describing one committed write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A parcel was registered.
    LandRegistered {
        /// The new parcel.
        id: LandId,
        /// Its initial owner.
        owner: AccountId,
        /// When it was registered.
        at: Timestamp,
    },

    /// The admin attested the current ownership claim of a parcel.
    LandVerified {
        /// The verified parcel.
        id: LandId,
        /// The owner whose claim was attested.
        owner: AccountId,
        /// When the attestation happened.
        at: Timestamp,
    },

    /// Title to a parcel changed hands.
    OwnershipTransferred {
        /// The transferred parcel.
        id: LandId,
        /// The previous owner.
        from: AccountId,
        /// The new owner.
        to: AccountId,
        /// When the transfer happened.
        at: Timestamp,
    },
}

/// Destination for committed-write events.
///
/// The sink is called after all ledger structures have been mutated, once
/// per successful write. It models the external observer; the ledger makes
/// no assumption about what the sink does with an event.
pub trait EventSink {
    /// Deliver one event.
    fn emit(&mut self, event: RegistryEvent);
}

/// A sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: RegistryEvent) {}
}

/// A sink that retains every event, in emission order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// All events delivered so far, oldest first.
    pub events: Vec<RegistryEvent>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: RegistryEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_retains_in_order() {
        let mut sink = RecordingSink::new();
        let first = RegistryEvent::LandRegistered {
            id: LandId(1),
            owner: AccountId::new(),
            at: Timestamp::now(),
        };
        let second = RegistryEvent::LandVerified {
            id: LandId(1),
            owner: AccountId::new(),
            at: Timestamp::now(),
        };

        sink.emit(first.clone());
        sink.emit(second.clone());
        assert_eq!(sink.events, vec![first, second]);
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let event = RegistryEvent::OwnershipTransferred {
            id: LandId(3),
            from: AccountId::new(),
            to: AccountId::new(),
            at: Timestamp::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let parsed: RegistryEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
