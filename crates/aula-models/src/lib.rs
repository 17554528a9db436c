//! # Aula Models
//!
//! Shared data structures for the Aula client.
//!
//! # Modules
//!
//! - [`roles`]: the four login roles and their profile table
//! - [`login`]: form state, credentials, notifications and navigation
//! - [`students`]: student DTOs exchanged with the admin backend
//! - [`teachers`]: teacher DTOs exchanged with the admin backend
//! - [`serde`]: lenient deserialisers shared by the DTOs
//!
//! # Example
//!
//! ```ignore
//! use aula_models::{FormField, FormState, Role};
//!
//! let mut state = FormState::default();
//! state.set(FormField::StudentCode, "EST-2025-001");
//! let credentials = Role::Parent.profile().collect(&state);
//! assert!(credentials.verify().is_ok());
//! ```

pub mod login;
pub mod roles;
pub mod serde;
pub mod students;
pub mod teachers;

pub use login::{
    AccountCredentials, Credentials, FormField, FormState, LoginError, Navigation,
    NavigationState, Notification, Route, Severity, StudentLookup,
};

pub use roles::{ButtonVariant, CredentialKind, FieldSpec, Role, RoleProfile};

pub use students::{EstudianteCreateDto, EstudianteDto, EstudianteUpdateDto, RudeCode};

pub use teachers::{DocenteCreateDto, DocenteDto, DocenteUpdateDto};
