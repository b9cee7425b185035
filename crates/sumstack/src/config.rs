//! Backend address resolution.
//!
//! Development talks to a fixed local backend; production reads the address
//! from the environment with a hard-coded fallback. This is configuration,
//! not logic, so the selection is a pure function with a thin env wrapper.

/// Backend address used in development mode.
pub const DEV_BACKEND_URL: &str = "http://localhost:5001";

/// Fallback backend address when production mode has no override.
pub const PROD_FALLBACK_URL: &str = "https://sumstack-backend.up.railway.app";

/// Environment variable that overrides the production backend address.
pub const BACKEND_URL_ENV: &str = "SUMSTACK_BACKEND_URL";

/// Deployment mode the client runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Local development against a backend on this machine.
    #[default]
    Development,
    /// Deployed build against a remote backend.
    Production,
}

/// Resolves the backend base address for a mode and an optional override.
///
/// The override only applies in production; development always targets the
/// fixed local address.
#[must_use]
pub fn resolve_backend_url(mode: Mode, override_url: Option<&str>) -> String {
    match mode {
        Mode::Development => DEV_BACKEND_URL.to_string(),
        Mode::Production => override_url
            .filter(|url| !url.is_empty())
            .unwrap_or(PROD_FALLBACK_URL)
            .to_string(),
    }
}

/// Resolves the backend base address from the process environment.
#[must_use]
pub fn backend_url_from_env(mode: Mode) -> String {
    let override_url = std::env::var(BACKEND_URL_ENV).ok();
    resolve_backend_url(mode, override_url.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_ignores_override() {
        let url = resolve_backend_url(Mode::Development, Some("https://elsewhere.example"));
        assert_eq!(url, DEV_BACKEND_URL);
    }

    #[test]
    fn test_production_uses_override() {
        let url = resolve_backend_url(Mode::Production, Some("https://elsewhere.example"));
        assert_eq!(url, "https://elsewhere.example");
    }

    #[test]
    fn test_production_falls_back_without_override() {
        let url = resolve_backend_url(Mode::Production, None);
        assert_eq!(url, PROD_FALLBACK_URL);
    }

    #[test]
    fn test_production_falls_back_on_empty_override() {
        let url = resolve_backend_url(Mode::Production, Some(""));
        assert_eq!(url, PROD_FALLBACK_URL);
    }

    #[test]
    fn test_mode_default_is_development() {
        assert_eq!(Mode::default(), Mode::Development);
    }
}
