use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Server-assigned room identifier. json-server hands out numeric ids on
/// some versions and string ids on others, so the client treats it as an
/// opaque JSON scalar and only ever echoes it back into the request path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(serde_json::Value);

impl RoomId {
    pub fn path_segment(&self) -> String {
        match &self.0 {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_segment())
    }
}

impl From<serde_json::Value> for RoomId {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// The fixed room type enumeration. Input is matched case-insensitively;
/// the wire always carries the canonical capitalized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RoomType {
    Individual,
    Doble,
    Suite,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [RoomType::Individual, RoomType::Doble, RoomType::Suite];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "individual" => Some(Self::Individual),
            "doble" => Some(Self::Doble),
            "suite" => Some(Self::Suite),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Doble => "Doble",
            Self::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for RoomType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("unknown room type '{value}'"))
    }
}

impl From<RoomType> for String {
    fn from(value: RoomType) -> Self {
        value.label().to_string()
    }
}

/// A room record as stored on the server. Field names are the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub numero: String,
    pub nombre: String,
    pub tipo: RoomType,
    pub precio: f64,
    #[serde(rename = "fechaDisponibilidad")]
    pub fecha_disponibilidad: NaiveDate,
    pub reservada: bool,
}

impl Room {
    pub fn status_label(&self) -> &'static str {
        if self.reservada {
            "Reservada"
        } else {
            "Disponible"
        }
    }
}

/// Creation payload: a room without an id. The server assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRoom {
    pub numero: String,
    pub nombre: String,
    pub tipo: RoomType,
    pub precio: f64,
    #[serde(rename = "fechaDisponibilidad")]
    pub fecha_disponibilidad: NaiveDate,
    pub reservada: bool,
}
