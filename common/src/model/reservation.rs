use serde::{Deserialize, Serialize};

use crate::model::id::EntityId;
use crate::model::nullable::null_as_default;

/// A booking of a room by a user, as returned by `GET /api/reservas`.
///
/// `user_id` and `room_id` are plain references into the sibling
/// collections; nothing guarantees they still resolve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default)]
    pub id: EntityId,
    #[serde(rename = "usuarioId", default)]
    pub user_id: EntityId,
    #[serde(rename = "salaId", default)]
    pub room_id: EntityId,
    #[serde(rename = "dataHora", default, deserialize_with = "null_as_default")]
    pub date_time: String,
}
