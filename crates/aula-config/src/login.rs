use std::env;
use std::time::Duration;

/// Default pause between the success notification and the navigation.
pub const DEFAULT_NAVIGATION_DELAY_MS: u64 = 400;

/// Login form settings.
///
/// # Environment Variables
///
/// - `LOGIN_NAVIGATION_DELAY_MS`: delay before navigating after a successful
///   submit (default: `400`). Zero navigates on the next scheduler tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginConfig {
    pub navigation_delay: Duration,
}

impl LoginConfig {
    pub fn from_env() -> Self {
        let millis = env::var("LOGIN_NAVIGATION_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_NAVIGATION_DELAY_MS);

        Self {
            navigation_delay: Duration::from_millis(millis),
        }
    }

    /// Config that navigates without waiting.
    pub fn immediate() -> Self {
        Self {
            navigation_delay: Duration::ZERO,
        }
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            navigation_delay: Duration::from_millis(DEFAULT_NAVIGATION_DELAY_MS),
        }
    }
}
