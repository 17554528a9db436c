use std::sync::{Arc, Mutex};
use std::time::Duration;

use aula::{LoginForm, LoginModal, Navigator, Notifier};
use aula_config::LoginConfig;
use aula_models::{Navigation, Notification, Role};

/// Collects everything a login card emits.
#[derive(Default)]
pub struct RecordingSurface {
    notifications: Mutex<Vec<Notification>>,
    navigations: Mutex<Vec<Navigation>>,
}

#[allow(dead_code)]
impl RecordingSurface {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn navigations(&self) -> Vec<Navigation> {
        self.navigations.lock().unwrap().clone()
    }
}

impl Notifier for RecordingSurface {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

impl Navigator for RecordingSurface {
    fn navigate(&self, navigation: Navigation) {
        self.navigations.lock().unwrap().push(navigation);
    }
}

/// A login card that navigates without delay.
#[allow(dead_code)]
pub fn immediate_form(role: Role) -> (LoginForm, Arc<RecordingSurface>) {
    form_with_delay(role, Duration::ZERO)
}

#[allow(dead_code)]
pub fn form_with_delay(role: Role, delay: Duration) -> (LoginForm, Arc<RecordingSurface>) {
    let surface = Arc::new(RecordingSurface::default());
    let config = LoginConfig {
        navigation_delay: delay,
    };
    let form = LoginForm::new(role, config, surface.clone(), surface.clone());
    (form, surface)
}

#[allow(dead_code)]
pub fn modal() -> (LoginModal, Arc<RecordingSurface>) {
    let surface = Arc::new(RecordingSurface::default());
    let modal = LoginModal::new(LoginConfig::immediate(), surface.clone(), surface.clone());
    (modal, surface)
}
