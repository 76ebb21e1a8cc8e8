//! Form state controllers: one draft per entity form.
//!
//! A draft holds exactly what the user typed, as text. It only becomes a
//! request payload through `to_request`, which validates first. Fields can
//! be addressed by their backend name (`"nome"`, `"cidade"`, ...) so a view
//! can route every input of a form through one handler.

mod reservation;
mod room;
mod user;
pub mod validation;

use thiserror::Error;

use crate::model::collection::Collection;

pub use reservation::{ReservationDraft, ReservationField};
pub use room::{RoomDraft, RoomField};
pub use user::{AddressDraft, AddressField, UserDraft, UserField};
pub use validation::ValidationError;

/// An input name that does not belong to the form it was sent to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("campo desconhecido: {0}")]
pub struct UnknownField(pub String);

/// Which entity form an action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    User,
    Room,
    Reservation,
}

impl Form {
    pub fn collection(self) -> Collection {
        match self {
            Form::User => Collection::Users,
            Form::Room => Collection::Rooms,
            Form::Reservation => Collection::Reservations,
        }
    }
}
