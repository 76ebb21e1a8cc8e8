use std::str::FromStr;

use crate::forms::validation::{self, ValidationError};
use crate::forms::UnknownField;
use crate::requests::CreateRoomRequest;

/// Draft of the room form. `capacity` is the raw text of the number input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDraft {
    pub name: String,
    pub capacity: String,
}

impl Default for RoomDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            capacity: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomField {
    Name,
    Capacity,
}

impl FromStr for RoomField {
    type Err = UnknownField;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "nome" => Ok(RoomField::Name),
            "capacidade" => Ok(RoomField::Capacity),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

impl RoomDraft {
    pub fn set_field(&mut self, field: RoomField, value: String) {
        match field {
            RoomField::Name => self.name = value,
            RoomField::Capacity => self.capacity = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validates the draft and builds the `POST /api/salas` body, with the
    /// capacity coerced to an integer.
    pub fn to_request(&self) -> Result<CreateRoomRequest, ValidationError> {
        validation::required("Nome da Sala", &self.name)?;
        let capacity = validation::capacity(&self.capacity)?;

        Ok(CreateRoomRequest {
            name: self.name.clone(),
            capacity,
        })
    }
}
