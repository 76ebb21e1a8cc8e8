//! Request payloads for the three create endpoints.
//!
//! These are built from the form drafts (`crate::forms`) only after the
//! draft passed validation, so every payload here is ready to be posted.

use serde::Serialize;

use crate::model::collection::Collection;
use crate::model::id::EntityId;

/// Body of `POST /api/usuarios`. Optional fields are sent as `""`, never
/// omitted, and the address object is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserRequest {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    pub cpf: String,
    #[serde(rename = "dataNascimento")]
    pub birth_date: String,
    #[serde(rename = "endereco")]
    pub address: AddressPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressPayload {
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(rename = "cep")]
    pub postal_code: String,
    #[serde(rename = "rua")]
    pub street: String,
}

/// Body of `POST /api/salas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRoomRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "capacidade")]
    pub capacity: u32,
}

/// Body of `POST /api/reservas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateReservationRequest {
    #[serde(rename = "usuarioId")]
    pub user_id: EntityId,
    #[serde(rename = "salaId")]
    pub room_id: EntityId,
    #[serde(rename = "dataHora")]
    pub date_time: String,
}

/// Any create call the console can issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateRequest {
    User(CreateUserRequest),
    Room(CreateRoomRequest),
    Reservation(CreateReservationRequest),
}

impl CreateRequest {
    pub fn collection(&self) -> Collection {
        match self {
            CreateRequest::User(_) => Collection::Users,
            CreateRequest::Room(_) => Collection::Rooms,
            CreateRequest::Reservation(_) => Collection::Reservations,
        }
    }

    /// JSON body of the request.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            CreateRequest::User(body) => serde_json::to_value(body),
            CreateRequest::Room(body) => serde_json::to_value(body),
            CreateRequest::Reservation(body) => serde_json::to_value(body),
        }
    }
}
