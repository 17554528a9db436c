//! Teacher DTOs exchanged with the admin backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde::deserialize_id;

fn default_active() -> bool {
    true
}

/// A teacher record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocenteDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub nombres: String,
    pub apellidos: String,
    #[serde(default)]
    pub ci: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub especialidad: Option<String>,
    #[serde(default)]
    pub usuario: Option<String>,
    #[serde(default = "default_active")]
    pub activo: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a teacher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocenteCreateDto {
    pub nombres: String,
    pub apellidos: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ci: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub especialidad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub usuario: Option<String>,
}

/// Partial update for a teacher. Only present fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocenteUpdateDto {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nombres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub apellidos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ci: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub especialidad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub usuario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub activo: Option<bool>,
}
