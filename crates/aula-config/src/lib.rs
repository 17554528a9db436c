//! # Aula Config
//!
//! Configuration types for the Aula client.
//!
//! Every struct is loaded from environment variables and has a `Default`
//! matching the documented fallbacks:
//!
//! - [`api`]: backend base URL for the admin resource client
//! - [`login`]: login form pacing
//! - [`logging`]: log level and optional log directory
//!
//! # Example
//!
//! ```ignore
//! use aula_config::{ApiConfig, LoginConfig, LoggingConfig};
//!
//! dotenvy::dotenv().ok();
//! let api = ApiConfig::from_env();
//! let login = LoginConfig::from_env();
//! let logging = LoggingConfig::from_env();
//! ```

pub mod api;
pub mod logging;
pub mod login;

pub use api::ApiConfig;
pub use logging::LoggingConfig;
pub use login::LoginConfig;
