//! Remote collection store.
//!
//! Holds the last snapshot of each backend collection. A refresh replaces a
//! collection wholesale; a failed refresh leaves the previous snapshot in
//! place. Each collection lives in its own slot, so refreshing one never
//! touches the others.

use crate::api::ApiError;
use crate::model::collection::Collection;
use crate::model::reservation::Reservation;
use crate::model::room::Room;
use crate::model::user::User;
use crate::workflow::pending::OpId;

/// Full contents of one collection as read from the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Users(Vec<User>),
    Rooms(Vec<Room>),
    Reservations(Vec<Reservation>),
}

impl Snapshot {
    pub fn empty(collection: Collection) -> Self {
        match collection {
            Collection::Users => Snapshot::Users(Vec::new()),
            Collection::Rooms => Snapshot::Rooms(Vec::new()),
            Collection::Reservations => Snapshot::Reservations(Vec::new()),
        }
    }

    /// Decodes a JSON array body into the snapshot type of `collection`.
    pub fn decode(collection: Collection, body: &str) -> Result<Self, ApiError> {
        let decoded = match collection {
            Collection::Users => serde_json::from_str(body).map(Snapshot::Users),
            Collection::Rooms => serde_json::from_str(body).map(Snapshot::Rooms),
            Collection::Reservations => serde_json::from_str(body).map(Snapshot::Reservations),
        };
        decoded.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn collection(&self) -> Collection {
        match self {
            Snapshot::Users(_) => Collection::Users,
            Snapshot::Rooms(_) => Collection::Rooms,
            Snapshot::Reservations(_) => Collection::Reservations,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Snapshot::Users(items) => items.len(),
            Snapshot::Rooms(items) => items.len(),
            Snapshot::Reservations(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One collection plus the refresh that produced it.
#[derive(Debug, Clone, PartialEq)]
struct Slot<T> {
    items: Vec<T>,
    revision: Option<OpId>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            revision: None,
        }
    }
}

impl<T> Slot<T> {
    /// Replaces the items unless a later refresh already landed.
    fn replace(&mut self, revision: OpId, items: Vec<T>) -> bool {
        if self.revision.is_some_and(|current| current > revision) {
            return false;
        }
        self.items = items;
        self.revision = Some(revision);
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionStore {
    users: Slot<User>,
    rooms: Slot<Room>,
    reservations: Slot<Reservation>,
}

impl CollectionStore {
    pub fn users(&self) -> &[User] {
        &self.users.items
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms.items
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations.items
    }

    /// Whether a refresh started after `revision` already landed in
    /// `collection`.
    pub fn has_newer(&self, collection: Collection, revision: OpId) -> bool {
        let current = match collection {
            Collection::Users => self.users.revision,
            Collection::Rooms => self.rooms.revision,
            Collection::Reservations => self.reservations.revision,
        };
        current.is_some_and(|current| current > revision)
    }

    /// Installs `snapshot` as the new contents of its collection.
    ///
    /// `revision` is the id of the refresh that fetched it. Returns `false`
    /// (and changes nothing) when a newer refresh of the same collection has
    /// already been applied.
    pub fn apply(&mut self, revision: OpId, snapshot: Snapshot) -> bool {
        match snapshot {
            Snapshot::Users(items) => self.users.replace(revision, items),
            Snapshot::Rooms(items) => self.rooms.replace(revision, items),
            Snapshot::Reservations(items) => self.reservations.replace(revision, items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::EntityId;

    fn room(id: i64, name: &str) -> Room {
        Room {
            id: EntityId::from(id),
            name: name.to_string(),
            capacity: 4,
        }
    }

    #[test]
    fn apply_replaces_instead_of_merging() {
        let mut store = CollectionStore::default();
        assert!(store.apply(OpId(1), Snapshot::Rooms(vec![room(1, "A"), room(2, "B")])));
        assert!(store.apply(OpId(2), Snapshot::Rooms(vec![room(3, "C")])));

        assert_eq!(store.rooms(), &[room(3, "C")]);
    }

    #[test]
    fn collections_are_independent() {
        let mut store = CollectionStore::default();
        let user = User {
            id: EntityId::from(1),
            name: "Ana".to_string(),
            ..User::default()
        };
        store.apply(OpId(1), Snapshot::Users(vec![user.clone()]));
        store.apply(OpId(2), Snapshot::Rooms(vec![room(1, "A")]));
        store.apply(OpId(3), Snapshot::Rooms(Vec::new()));

        assert_eq!(store.users(), &[user]);
        assert!(store.rooms().is_empty());
    }

    #[test]
    fn tracks_newer_revisions_per_collection() {
        let mut store = CollectionStore::default();
        assert!(!store.has_newer(Collection::Rooms, OpId(1)));
        store.apply(OpId(3), Snapshot::Rooms(vec![room(1, "A")]));
        assert!(store.has_newer(Collection::Rooms, OpId(2)));
        assert!(!store.has_newer(Collection::Rooms, OpId(3)));
        assert!(!store.has_newer(Collection::Users, OpId(2)));
    }

    #[test]
    fn stale_snapshot_is_discarded() {
        let mut store = CollectionStore::default();
        assert!(store.apply(OpId(5), Snapshot::Rooms(vec![room(1, "new")])));
        assert!(!store.apply(OpId(4), Snapshot::Rooms(vec![room(1, "old")])));
        assert_eq!(store.rooms()[0].name, "new");

        // Other collections keep their own revisions.
        assert!(store.apply(OpId(2), Snapshot::Users(Vec::new())));
    }
}
