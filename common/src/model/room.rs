use serde::{Deserialize, Serialize};

use crate::model::id::EntityId;
use crate::model::nullable::null_as_default;

/// A bookable room, as returned by `GET /api/salas`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default)]
    pub id: EntityId,
    #[serde(rename = "nome", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "capacidade", default, deserialize_with = "null_as_default")]
    pub capacity: u32,
}
