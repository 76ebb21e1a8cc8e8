use std::str::FromStr;

use crate::forms::validation::{self, ValidationError};
use crate::forms::UnknownField;
use crate::model::id::EntityId;
use crate::requests::CreateReservationRequest;

/// Draft of the reservation form. The ids are the selected `<option>`
/// values; `date_time` is the `datetime-local` input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationDraft {
    pub user_id: String,
    pub room_id: String,
    pub date_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationField {
    UserId,
    RoomId,
    DateTime,
}

impl FromStr for ReservationField {
    type Err = UnknownField;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "usuarioId" => Ok(ReservationField::UserId),
            "salaId" => Ok(ReservationField::RoomId),
            "dataHora" => Ok(ReservationField::DateTime),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

impl ReservationDraft {
    pub fn set_field(&mut self, field: ReservationField, value: String) {
        match field {
            ReservationField::UserId => self.user_id = value,
            ReservationField::RoomId => self.room_id = value,
            ReservationField::DateTime => self.date_time = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validates the draft and builds the `POST /api/reservas` body. Fields
    /// are forwarded as typed.
    pub fn to_request(&self) -> Result<CreateReservationRequest, ValidationError> {
        validation::required("Usuário", &self.user_id)?;
        validation::required("Sala", &self.room_id)?;
        validation::date_time(&self.date_time)?;

        Ok(CreateReservationRequest {
            user_id: EntityId::new(self.user_id.clone()),
            room_id: EntityId::new(self.room_id.clone()),
            date_time: self.date_time.clone(),
        })
    }
}
