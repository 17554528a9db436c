//! # Aula
//!
//! Client side of an educational management platform: the role-based login
//! modal and a typed admin client for student and teacher records.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Terminal front-end (login prompts, admin commands)
//! ├── logging.rs        # tracing subscriber setup
//! └── modules/
//!     └── login/        # Login cards and the modal that holds them
//! crates/
//! ├── aula-config/      # Environment-driven configuration
//! ├── aula-models/      # Roles, form types, notifications, DTOs
//! └── aula-client/      # JSON-over-HTTP admin client
//! ```
//!
//! ## Roles
//!
//! | Role | Card title | Fields | After login |
//! |------|------------|--------|-------------|
//! | Parent | Padres/Tutores | student code or name | `/dashboard/parent` |
//! | Student | Estudiantes | identifier, password | `/dashboard/student` |
//! | Teacher | Docentes | identifier, password | `/seleccionar-nivel` (role: teacher) |
//! | Admin | Administrador | identifier, password | `/dashboard/admin` |
//!
//! Authentication is a placeholder: any non-blank input is accepted.
//!
//! ## Environment Variables
//!
//! ```bash
//! API_BASE=http://localhost:8080
//! LOGIN_NAVIGATION_DELAY_MS=400
//! LOG_LEVEL=info
//! LOG_DIR=storage/logs
//! ```

pub mod cli;
pub mod logging;
pub mod modules;

pub use modules::login::{LoginForm, LoginModal, Navigator, Notifier, PendingNavigation};

// Re-export workspace crates for convenience
pub use aula_client;
pub use aula_config;
pub use aula_models;
