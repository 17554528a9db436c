use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use aula_config::LoginConfig;
use aula_models::{Navigation, Notification};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, instrument, warn};

use crate::modules::login::model::{
    FormField, FormState, LoginError, Navigator, Notifier, Role, RoleProfile,
};

/// Form controller behind one login card.
///
/// The role is fixed at construction. Field edits only change state;
/// validation, notification and navigation happen in [`LoginForm::submit`].
pub struct LoginForm {
    role: Role,
    state: FormState,
    config: LoginConfig,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    in_flight: Arc<AtomicBool>,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("role", &self.role)
            .field("submitting", &self.is_submitting())
            .finish_non_exhaustive()
    }
}

impl LoginForm {
    pub fn new(
        role: Role,
        config: LoginConfig,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            role,
            state: FormState::default(),
            config,
            notifier,
            navigator,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn profile(&self) -> &'static RoleProfile {
        self.role.profile()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// True between an accepted submit and its navigation.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.state.set(field, value);
    }

    /// Validates the card and, on success, schedules the role's navigation.
    ///
    /// Must be called from within a Tokio runtime. The returned handle can be
    /// awaited; dropping it does not cancel the navigation.
    ///
    /// # Errors
    ///
    /// - `LoginError::MissingStudentIdentifier` / `MissingCredentials` when a
    ///   required field is blank; a destructive notification is emitted
    /// - `LoginError::SubmissionInFlight` while an earlier navigation is
    ///   still pending; nothing is emitted
    #[instrument(skip(self), fields(role = %self.role))]
    pub fn submit(&self) -> Result<PendingNavigation, LoginError> {
        if self.is_submitting() {
            debug!("Submit ignored, navigation pending");
            return Err(LoginError::SubmissionInFlight);
        }

        let profile = self.role.profile();
        if let Err(err) = profile.collect(&self.state).verify() {
            warn!(code = err.code(), "Login form rejected");
            if let Some(notification) = err.notification() {
                self.notifier.notify(notification);
            }
            return Err(err);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(LoginError::SubmissionInFlight);
        }

        self.notifier.notify(Notification::welcome(profile.title));

        let navigation = profile.navigation();
        info!(path = navigation.route.path(), "Login accepted, navigation scheduled");

        let delay = self.config.navigation_delay;
        let navigator = Arc::clone(&self.navigator);
        let guard = InFlightGuard(Arc::clone(&self.in_flight));
        let handle = tokio::spawn(async move {
            let _guard = guard;
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            navigator.navigate(navigation);
        });

        Ok(PendingNavigation { navigation, handle })
    }
}

/// Clears the in-flight flag even if the navigator panics.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A navigation that has been scheduled but may not have happened yet.
#[derive(Debug)]
pub struct PendingNavigation {
    navigation: Navigation,
    handle: JoinHandle<()>,
}

impl PendingNavigation {
    pub fn navigation(&self) -> Navigation {
        self.navigation
    }

    pub fn is_dispatched(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait until the navigator has been called.
    pub async fn dispatched(self) -> Result<Navigation, JoinError> {
        self.handle.await?;
        Ok(self.navigation)
    }
}
