pub mod modal;
pub mod model;
pub mod service;

pub use modal::LoginModal;
pub use model::{Navigator, Notifier};
pub use service::{LoginForm, PendingNavigation};
