//! In-memory backend and a driver that runs the workflow to completion.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use common::api::responses::{interpret_body, interpret_listing, interpret_lookup};
use common::api::{ApiError, BookingApi};
use common::model::collection::Collection;
use common::model::id::EntityId;
use common::model::reservation::Reservation;
use common::model::room::Room;
use common::model::user::{Address, User};
use common::requests::CreateRequest;
use common::store::Snapshot;
use common::workflow::{Action, Command, ConsoleState, execute};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Fetch(Collection),
    Create(Collection, Value),
    Lookup(String),
}

#[derive(Default)]
pub struct FakeBackend {
    pub users: RefCell<Vec<User>>,
    pub rooms: RefCell<Vec<Room>>,
    pub reservations: RefCell<Vec<Reservation>>,
    pub calls: RefCell<Vec<Call>>,
    pub offline: Cell<bool>,
    /// Status lines arrive but the bodies of listings and lookups break off.
    pub unreadable_bodies: Cell<bool>,
    pub reject_creates_with: RefCell<Option<ApiError>>,
    last_ids: RefCell<[i64; 3]>,
}

impl FakeBackend {
    pub fn with_user(self, id: i64, name: &str, cpf: &str) -> Self {
        self.users.borrow_mut().push(User {
            id: EntityId::from(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            cpf: Some(cpf.to_string()),
            ..User::default()
        });
        self.bump(Collection::Users, id);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn creates(&self) -> Vec<(Collection, Value)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Create(collection, body) => Some((*collection, body.clone())),
                _ => None,
            })
            .collect()
    }

    fn slot(collection: Collection) -> usize {
        match collection {
            Collection::Users => 0,
            Collection::Rooms => 1,
            Collection::Reservations => 2,
        }
    }

    fn bump(&self, collection: Collection, at_least: i64) -> i64 {
        let mut ids = self.last_ids.borrow_mut();
        let last = &mut ids[Self::slot(collection)];
        *last = (*last + 1).max(at_least);
        *last
    }

    /// Per-collection sequence, like the backend's tables.
    fn next_id(&self, collection: Collection) -> EntityId {
        EntityId::from(self.bump(collection, 0))
    }

    /// Body as the HTTP transport would hand it over.
    fn body(&self, json: serde_json::Result<String>) -> Result<String, ApiError> {
        if self.unreadable_bodies.get() {
            return Err(ApiError::Transport("body stream interrupted".to_string()));
        }
        json.map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn unreachable(&self) -> Result<(), ApiError> {
        if self.offline.get() {
            Err(ApiError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

impl BookingApi for FakeBackend {
    async fn fetch(&self, collection: Collection) -> Result<Snapshot, ApiError> {
        self.calls.borrow_mut().push(Call::Fetch(collection));
        self.unreachable()?;
        let json = match collection {
            Collection::Users => serde_json::to_string(&*self.users.borrow()),
            Collection::Rooms => serde_json::to_string(&*self.rooms.borrow()),
            Collection::Reservations => serde_json::to_string(&*self.reservations.borrow()),
        };
        interpret_body(200, self.body(json), |status, body| {
            interpret_listing(collection, status, body)
        })
    }

    async fn create(&self, request: &CreateRequest) -> Result<(), ApiError> {
        let body = request.to_json().map_err(|e| ApiError::Decode(e.to_string()))?;
        self.calls
            .borrow_mut()
            .push(Call::Create(request.collection(), body));
        self.unreachable()?;
        if let Some(error) = self.reject_creates_with.borrow().clone() {
            return Err(error);
        }

        let id = self.next_id(request.collection());
        match request {
            CreateRequest::User(user) => self.users.borrow_mut().push(User {
                id,
                name: user.name.clone(),
                email: user.email.clone(),
                cpf: Some(user.cpf.clone()),
                birth_date: Some(user.birth_date.clone()),
                address: Some(Address {
                    city: Some(user.address.city.clone()),
                    state: Some(user.address.state.clone()),
                    postal_code: Some(user.address.postal_code.clone()),
                    street: Some(user.address.street.clone()),
                }),
            }),
            CreateRequest::Room(room) => self.rooms.borrow_mut().push(Room {
                id,
                name: room.name.clone(),
                capacity: room.capacity,
            }),
            CreateRequest::Reservation(reservation) => self.reservations.borrow_mut().push(Reservation {
                id,
                user_id: reservation.user_id.clone(),
                room_id: reservation.room_id.clone(),
                date_time: reservation.date_time.clone(),
            }),
        }
        Ok(())
    }

    async fn find_user_by_cpf(&self, cpf: &str) -> Result<Option<User>, ApiError> {
        self.calls.borrow_mut().push(Call::Lookup(cpf.to_string()));
        self.unreachable()?;
        let found = self
            .users
            .borrow()
            .iter()
            .find(|user| user.cpf.as_deref() == Some(cpf))
            .cloned();
        match found {
            Some(user) => interpret_body(200, self.body(serde_json::to_string(&user)), interpret_lookup),
            None => interpret_body(404, self.body(Ok(String::new())), interpret_lookup),
        }
    }
}

/// Feeds `action` into the state and executes every resulting command until
/// none are left. Notification timers are not run.
pub async fn drive(state: &mut ConsoleState, api: &FakeBackend, action: Action) {
    let mut queue: VecDeque<Command> = state.update(action).into();
    while let Some(command) = queue.pop_front() {
        if matches!(command, Command::DismissLater { .. }) {
            continue;
        }
        let completion = execute(api, command).await;
        queue.extend(state.update(completion));
    }
}
