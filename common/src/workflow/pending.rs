//! In-flight operation tracking.
//!
//! Every backend call gets its own `OpId`. Busy indicators are derived from
//! the set of entries, so one operation finishing never clears another's
//! indicator. An entry can be detached when the dialog that started it
//! closes: it stays in the set until its completion arrives, but no longer
//! counts as busy and its result no longer reaches the closed dialog.

use std::collections::BTreeMap;

use crate::model::collection::Collection;

/// Identifier of one backend call. Ids increase monotonically, so a larger
/// id always belongs to a later request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OpId(pub(crate) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Refresh(Collection),
    Create(Collection),
    Lookup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub operation: Operation,
    pub detached: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PendingOps {
    last: u64,
    in_flight: BTreeMap<OpId, Entry>,
}

impl PendingOps {
    pub fn begin(&mut self, operation: Operation) -> OpId {
        self.last += 1;
        let id = OpId(self.last);
        self.in_flight.insert(
            id,
            Entry {
                operation,
                detached: false,
            },
        );
        id
    }

    /// Removes the entry of a completed call. `None` when the id is unknown.
    pub fn finish(&mut self, id: OpId) -> Option<Entry> {
        self.in_flight.remove(&id)
    }

    /// Detaches every attached entry matching `predicate` and returns their ids.
    pub fn detach_where(&mut self, predicate: impl Fn(Operation) -> bool) -> Vec<OpId> {
        self.in_flight
            .iter_mut()
            .filter(|(_, entry)| !entry.detached && predicate(entry.operation))
            .map(|(id, entry)| {
                entry.detached = true;
                *id
            })
            .collect()
    }

    pub fn is_busy(&self, operation: Operation) -> bool {
        self.in_flight
            .values()
            .any(|entry| !entry.detached && entry.operation == operation)
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight.values().all(|entry| entry.detached)
    }

}
