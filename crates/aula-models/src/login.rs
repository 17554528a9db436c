//! Login form domain models.
//!
//! This module contains the per-card form state, the role-shaped credentials
//! derived from it, and the notification and navigation values a login
//! card emits.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::roles::Role;

/// The editable inputs of a login card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Identifier,
    Password,
    StudentCode,
}

/// Raw, unvalidated contents of one login card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub identifier: String,
    pub password: String,
    pub student_code: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Identifier => &self.identifier,
            FormField::Password => &self.password,
            FormField::StudentCode => &self.student_code,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Identifier => &mut self.identifier,
            FormField::Password => &mut self.password,
            FormField::StudentCode => &mut self.student_code,
        };
        *slot = value.into();
    }
}

/// A parent looking up a child by code or name.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct StudentLookup {
    #[validate(length(min = 1))]
    pub student_code: String,
}

/// Identifier and password for student, teacher and admin cards.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct AccountCredentials {
    #[validate(length(min = 1))]
    pub identifier: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Credentials in the shape the card's role submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    StudentLookup(StudentLookup),
    Account(AccountCredentials),
}

impl Credentials {
    /// Check the emptiness rule for this credential shape.
    ///
    /// No credential is checked against any store: any non-empty input is
    /// accepted.
    pub fn verify(&self) -> Result<(), LoginError> {
        match self {
            Credentials::StudentLookup(lookup) => lookup
                .validate()
                .map_err(|_| LoginError::MissingStudentIdentifier),
            Credentials::Account(account) => account
                .validate()
                .map_err(|_| LoginError::MissingCredentials),
        }
    }
}

/// Reasons a login submit is rejected locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Ingresa el código o nombre del estudiante.")]
    MissingStudentIdentifier,

    #[error("Por favor completa todos los campos.")]
    MissingCredentials,

    #[error("A login for this card is already in progress")]
    SubmissionInFlight,
}

impl LoginError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            LoginError::MissingStudentIdentifier => "missing_student_identifier",
            LoginError::MissingCredentials => "missing_credentials",
            LoginError::SubmissionInFlight => "submission_in_flight",
        }
    }

    /// The notification shown to the user, if any.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            LoginError::MissingStudentIdentifier | LoginError::MissingCredentials => {
                Some(Notification::destructive(
                    "Error de validación",
                    self.to_string(),
                ))
            }
            LoginError::SubmissionInFlight => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Destructive,
}

/// A toast-style message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Success,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    /// The greeting shown after a successful login on a card titled `title`.
    pub fn welcome(title: &str) -> Self {
        Self::success("Acceso exitoso", format!("Bienvenido, {}.", title))
    }
}

/// Route identifiers understood by the external router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[serde(rename = "/")]
    Home,
    #[serde(rename = "/dashboard/student")]
    StudentDashboard,
    #[serde(rename = "/dashboard/parent")]
    ParentDashboard,
    #[serde(rename = "/dashboard/admin")]
    AdminDashboard,
    #[serde(rename = "/seleccionar-nivel")]
    LevelSelection,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::StudentDashboard => "/dashboard/student",
            Route::ParentDashboard => "/dashboard/parent",
            Route::AdminDashboard => "/dashboard/admin",
            Route::LevelSelection => "/seleccionar-nivel",
        }
    }
}

/// Context attached to a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub role: Role,
}

/// A request for the router to move to `route`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    #[serde(rename = "path")]
    pub route: Route,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub state: Option<NavigationState>,
}

impl Navigation {
    pub fn to(route: Route) -> Self {
        Self { route, state: None }
    }

    pub fn with_state(route: Route, state: NavigationState) -> Self {
        Self {
            route,
            state: Some(state),
        }
    }

    pub fn home() -> Self {
        Self::to(Route::Home)
    }
}
