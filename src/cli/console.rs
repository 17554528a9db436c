//! Terminal rendering of notifications and navigations.

use aula_models::{Navigation, Notification, Severity};

use crate::modules::login::{Navigator, Notifier};

/// Prints notifications and navigations to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSurface;

impl Notifier for ConsoleSurface {
    fn notify(&self, notification: Notification) {
        let icon = match notification.severity {
            Severity::Success => "✅",
            Severity::Destructive => "❌",
        };
        println!(
            "{} {}: {}",
            icon, notification.title, notification.description
        );
    }
}

impl Navigator for ConsoleSurface {
    fn navigate(&self, navigation: Navigation) {
        match navigation.state {
            Some(state) => println!("➡️  {} (role: {})", navigation.route.path(), state.role),
            None => println!("➡️  {}", navigation.route.path()),
        }
    }
}
