//! Cross-reference resolver and table rows.
//!
//! Run on every render. Reservations are joined to users and rooms by a
//! linear search of the current snapshots; a reference that does not
//! resolve is shown as its raw identifier. Collections in this console are
//! small, so there is no index.

use num_format::{Locale, ToFormattedString};

use crate::forms::validation::{parse_date, parse_date_time};
use crate::model::id::EntityId;
use crate::model::room::Room;
use crate::model::user::User;
use crate::store::CollectionStore;

const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub birth_date: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRow {
    pub id: String,
    pub name: String,
    pub capacity: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRow {
    pub id: String,
    pub user: String,
    pub room: String,
    pub date_time: String,
}

/// Entry of a `<select>` in the reservation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

pub fn find_user<'a>(users: &'a [User], id: &EntityId) -> Option<&'a User> {
    users.iter().find(|user| &user.id == id)
}

pub fn find_room<'a>(rooms: &'a [Room], id: &EntityId) -> Option<&'a Room> {
    rooms.iter().find(|room| &room.id == id)
}

pub fn reservation_rows(store: &CollectionStore) -> Vec<ReservationRow> {
    store
        .reservations()
        .iter()
        .map(|reservation| ReservationRow {
            id: reservation.id.to_string(),
            user: find_user(store.users(), &reservation.user_id)
                .map_or_else(|| raw_id(&reservation.user_id), |user| user.name.clone()),
            room: find_room(store.rooms(), &reservation.room_id)
                .map_or_else(|| raw_id(&reservation.room_id), |room| room.name.clone()),
            date_time: format_date_time(&reservation.date_time),
        })
        .collect()
}

/// Unresolved reference as shown in a table cell.
fn raw_id(id: &EntityId) -> String {
    if id.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        id.to_string()
    }
}

pub fn user_rows(store: &CollectionStore) -> Vec<UserRow> {
    store
        .users()
        .iter()
        .map(|user| UserRow {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            cpf: non_empty(user.cpf.as_deref()).unwrap_or(PLACEHOLDER).to_string(),
            birth_date: non_empty(user.birth_date.as_deref())
                .map_or_else(|| PLACEHOLDER.to_string(), format_date),
            address: address_label(user),
        })
        .collect()
}

pub fn room_rows(store: &CollectionStore) -> Vec<RoomRow> {
    store
        .rooms()
        .iter()
        .map(|room| RoomRow {
            id: room.id.to_string(),
            name: room.name.clone(),
            capacity: room.capacity.to_formatted_string(&Locale::pt),
        })
        .collect()
}

pub fn user_options(store: &CollectionStore) -> Vec<SelectOption> {
    store
        .users()
        .iter()
        .map(|user| SelectOption {
            value: user.id.to_string(),
            label: user.name.clone(),
        })
        .collect()
}

pub fn room_options(store: &CollectionStore) -> Vec<SelectOption> {
    store
        .rooms()
        .iter()
        .map(|room| SelectOption {
            value: room.id.to_string(),
            label: format!("{} (Cap: {})", room.name, room.capacity),
        })
        .collect()
}

/// `"cidade/estado"` when both are known.
pub fn address_label(user: &User) -> String {
    let Some(address) = &user.address else {
        return PLACEHOLDER.to_string();
    };
    match (
        non_empty(address.city.as_deref()),
        non_empty(address.state.as_deref()),
    ) {
        (Some(city), Some(state)) => format!("{city}/{state}"),
        _ => PLACEHOLDER.to_string(),
    }
}

/// `YYYY-MM-DD` as `DD/MM/YYYY`; anything else as typed. The backend may
/// append a time part, which is ignored.
pub fn format_date(value: &str) -> String {
    let day = value.get(..10).unwrap_or(value);
    parse_date(day).map_or_else(|| value.to_string(), |date| date.format("%d/%m/%Y").to_string())
}

/// `YYYY-MM-DDTHH:MM[:SS]` as `DD/MM/YYYY HH:MM`; anything else as typed.
pub fn format_date_time(value: &str) -> String {
    parse_date_time(value).map_or_else(
        || value.to_string(),
        |date_time| date_time.format("%d/%m/%Y %H:%M").to_string(),
    )
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
