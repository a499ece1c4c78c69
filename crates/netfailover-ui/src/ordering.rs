//! Response ordering for view regions
//!
//! Every view keeps its state in a `Region`. Fetches take a `Ticket` when
//! they are issued and hand it back with the parsed response when they
//! complete. In `Arrival` mode every completion is applied, so the last
//! response to arrive wins even if it was issued first. In `Sequenced` mode
//! a completion is dropped when a newer ticket has already been applied.

use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// How completions of overlapping requests are applied to a region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseOrdering {
    /// Apply every successful completion in arrival order
    #[default]
    Arrival,
    /// Apply a completion only if it was issued after the last applied one
    Sequenced,
}

impl std::str::FromStr for ResponseOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "arrival" => Ok(ResponseOrdering::Arrival),
            "sequenced" => Ok(ResponseOrdering::Sequenced),
            other => Err(format!(
                "Invalid response ordering '{}'. Use 'arrival' or 'sequenced'",
                other
            )),
        }
    }
}

/// Issue-order tag of one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// What happened to a successful completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The region now shows this response
    Applied,
    /// A newer response was already applied; this one was dropped
    Superseded,
}

#[derive(Debug)]
struct Slot<T> {
    value: T,
    last_applied: u64,
}

/// Single-writer-at-a-time state holder for one rendered region
#[derive(Debug)]
pub struct Region<T> {
    ordering: ResponseOrdering,
    issued: AtomicU64,
    slot: RwLock<Slot<T>>,
}

impl<T: Clone> Region<T> {
    pub fn new(initial: T, ordering: ResponseOrdering) -> Self {
        Self {
            ordering,
            issued: AtomicU64::new(0),
            slot: RwLock::new(Slot {
                value: initial,
                last_applied: 0,
            }),
        }
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    /// Tag a request at issue time
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Replace the region's value wholesale with a completed response
    pub fn apply(&self, ticket: Ticket, value: T) -> Completion {
        let mut slot = self
            .slot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if self.ordering == ResponseOrdering::Sequenced && ticket.0 <= slot.last_applied {
            return Completion::Superseded;
        }

        slot.value = value;
        slot.last_applied = slot.last_applied.max(ticket.0);
        Completion::Applied
    }

    /// Copy of the current value
    pub fn snapshot(&self) -> T {
        self.read(T::clone)
    }

    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let slot = self
            .slot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&slot.value)
    }
}
