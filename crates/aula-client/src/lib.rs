//! # Aula Client
//!
//! Typed JSON-over-HTTP client for the admin backend.
//!
//! This crate provides:
//! - [`AdminClient`]: a cookie-carrying HTTP client bound to one base URL
//! - [`AdminClient::request`]: the generic request primitive
//! - [`Students`] and [`Teachers`]: list/get/create/update facades
//! - [`ApiError`]: failures surfaced to callers, never retried
//!
//! # Example
//!
//! ```ignore
//! use aula_client::AdminClient;
//! use aula_config::ApiConfig;
//!
//! let client = AdminClient::new(ApiConfig::from_env())?;
//! let students = client.students().list("curso=3ro").await?;
//! let fresh = client.students().regenerate_code(&students[0].id).await?;
//! ```

pub mod client;
pub mod error;
pub mod students;
pub mod teachers;

pub use client::{AdminClient, RequestOptions};
pub use error::ApiError;
pub use students::Students;
pub use teachers::Teachers;
