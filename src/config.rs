use std::env;

/// Backend the admin dashboard talks to in development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8003";

/// Client-side route the token guard navigates to when a session expires.
pub const DEFAULT_LOGIN_ROUTE: &str = "/auth";

/// Process-wide configuration, read once at startup and passed by reference
/// to the components that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub login_route: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        }
    }
}

impl AppConfig {
    /// Build a config from the environment, falling back to the development
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("MANDIR_API_BASE_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.api_base_url),
            login_route: env::var("MANDIR_LOGIN_ROUTE")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.login_route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8003");
        assert_eq!(config.login_route, "/auth");
    }
}
