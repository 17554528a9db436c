//! The login selection modal.
//!
//! Owns one [`LoginForm`] per role, in the order the cards are presented.
//! While closed the modal renders nothing.

use std::sync::Arc;

use aula_config::LoginConfig;

use crate::modules::login::model::{Navigator, Notifier, Role};
use crate::modules::login::service::LoginForm;

pub const HEADING: &str = "Accede a tu Panel";
pub const SUBTITLE: &str =
    "Selecciona tu tipo de usuario para ingresar a la plataforma educativa";

pub const SUPPORT_TITLE: &str = "¿Primera vez en la plataforma?";
pub const SUPPORT_BODY: &str = "Si es tu primera vez accediendo al sistema o tienes problemas con tus credenciales, contacta con la administración de tu institución educativa para obtener acceso.";
pub const SUPPORT_ACTIONS: [&str; 2] = ["Contactar Soporte Técnico", "Ver Guía de Usuario"];

/// Feature highlights shown under the cards, as `(title, body)`.
pub const HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "📱 Acceso 24/7",
        "Disponible desde cualquier dispositivo con internet",
    ),
    (
        "🔒 Plataforma Segura",
        "Tus datos están protegidos con encriptación avanzada",
    ),
    (
        "⚡ Tiempo Real",
        "Información actualizada instantáneamente",
    ),
];

#[derive(Debug)]
pub struct LoginModal {
    is_open: bool,
    forms: [LoginForm; 4],
}

impl LoginModal {
    /// Builds a closed modal with four empty cards sharing one notification
    /// channel and one router.
    pub fn new(
        config: LoginConfig,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let forms = Role::ALL.map(|role| {
            LoginForm::new(
                role,
                config.clone(),
                Arc::clone(&notifier),
                Arc::clone(&navigator),
            )
        });

        Self {
            is_open: false,
            forms,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Closes the modal only when the click landed on the backdrop itself,
    /// not on content inside it.
    pub fn backdrop_clicked(&mut self, target_is_backdrop: bool) {
        if target_is_backdrop {
            self.close();
        }
    }

    /// The cards to render: none while closed.
    pub fn cards(&self) -> &[LoginForm] {
        if self.is_open { &self.forms } else { &[] }
    }

    pub fn form(&self, role: Role) -> &LoginForm {
        &self.forms[slot(role)]
    }

    pub fn form_mut(&mut self, role: Role) -> &mut LoginForm {
        &mut self.forms[slot(role)]
    }
}

fn slot(role: Role) -> usize {
    match role {
        Role::Parent => 0,
        Role::Student => 1,
        Role::Teacher => 2,
        Role::Admin => 3,
    }
}
