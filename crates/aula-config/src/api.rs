use std::env;

/// Backend connection settings for the admin resource client.
///
/// # Environment Variables
///
/// - `API_BASE`: prefix prepended to every request path (default: empty,
///   meaning paths are used as given)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("API_BASE")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_default(),
        }
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Join the base URL and a path by plain concatenation.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
