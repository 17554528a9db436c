//! Login domain models and the seams a login card talks through.

use aula_models::{Navigation, Notification};

pub use aula_models::{
    Credentials, FieldSpec, FormField, FormState, LoginError, NavigationState, Role, RoleProfile,
    Route, Severity,
};

/// Receives user-facing notifications (the toast channel).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Receives navigation requests (the external router).
pub trait Navigator: Send + Sync {
    fn navigate(&self, navigation: Navigation);
}
