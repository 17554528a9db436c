//! Student DTOs exchanged with the admin backend.
//!
//! The backend assigns `id` and the unique `codigo_rude` registration code
//! when a student is created.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_id, deserialize_optional_date};

/// A student record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstudianteDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub codigo_rude: String,
    pub nombres: String,
    pub apellidos: String,
    #[serde(default)]
    pub ci: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[serde(default)]
    pub genero: Option<String>,
    #[serde(default)]
    pub curso: Option<String>,
    #[serde(default)]
    pub paralelo: Option<String>,
    #[serde(default)]
    pub tutor_nombre: Option<String>,
    #[serde(default)]
    pub tutor_telefono: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstudianteCreateDto {
    pub nombres: String,
    pub apellidos: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ci: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub genero: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub curso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub paralelo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tutor_nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tutor_telefono: Option<String>,
}

/// Partial update for a student. Only present fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstudianteUpdateDto {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nombres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub apellidos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ci: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub genero: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub curso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub paralelo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tutor_nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tutor_telefono: Option<String>,
}

/// Response of the registration-code regeneration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RudeCode {
    pub codigo_rude: String,
}
