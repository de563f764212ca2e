//! Environment lookup for settings construction
//!
//! Environment access is an injected capability so construction can be driven
//! by synthetic values in tests without touching the process environment.

use std::collections::HashMap;
use tracing::debug;

use crate::schema::UiSettings;

/// Environment variable naming the Keycloak account-console URI
pub const KEYCLOAK_URI_ACCOUNT: &str = "KEYCLOAK_URI_ACCOUNT";

/// Environment variable naming the Keycloak management-console URI
pub const KEYCLOAK_URI_MANAGEMENT: &str = "KEYCLOAK_URI_MANAGEMENT";

/// A source of environment variables
pub trait EnvSource {
    /// Looks up a variable by name
    fn var(&self, key: &str) -> Option<String>;
}

/// Environment source backed by the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Environment source backed by an in-memory map
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, returning the environment for chaining
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Resolves the environment-derived fields onto a settings record
///
/// A variable that is not set leaves the field untouched; a variable that is
/// set but empty disables the integration explicitly.
pub(crate) fn apply_environment(settings: &mut UiSettings, env: &dyn EnvSource) {
    if let Some(value) = env.var(KEYCLOAK_URI_ACCOUNT) {
        settings.change_pwd_uri = non_empty(value, KEYCLOAK_URI_ACCOUNT);
    }
    if let Some(value) = env.var(KEYCLOAK_URI_MANAGEMENT) {
        settings.kc_management_uri = non_empty(value, KEYCLOAK_URI_MANAGEMENT);
    }
}

fn non_empty(value: String, key: &str) -> Option<String> {
    if value.trim().is_empty() {
        debug!("{} is set but empty, integration disabled", key);
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_uri_resolves_to_exact_string() {
        let env = MapEnv::new().set(KEYCLOAK_URI_ACCOUNT, "https://sso.example.com/account");

        let mut settings = UiSettings::default();
        apply_environment(&mut settings, &env);

        assert_eq!(
            settings.change_pwd_uri.as_deref(),
            Some("https://sso.example.com/account")
        );
        assert_eq!(settings.kc_management_uri, None);
    }

    #[test]
    fn test_management_uri_resolves_symmetrically() {
        let env = MapEnv::new().set(KEYCLOAK_URI_MANAGEMENT, "https://sso.example.com/admin");

        let mut settings = UiSettings::default();
        apply_environment(&mut settings, &env);

        assert_eq!(settings.change_pwd_uri, None);
        assert_eq!(
            settings.kc_management_uri.as_deref(),
            Some("https://sso.example.com/admin")
        );
    }

    #[test]
    fn test_unset_variables_leave_fields_untouched() {
        let mut settings = UiSettings::default();
        settings.change_pwd_uri = Some("https://from-document.example.com".to_string());

        apply_environment(&mut settings, &MapEnv::new());

        assert_eq!(
            settings.change_pwd_uri.as_deref(),
            Some("https://from-document.example.com")
        );
    }

    #[test]
    fn test_empty_variable_disables_integration() {
        let env = MapEnv::new()
            .set(KEYCLOAK_URI_ACCOUNT, "")
            .set(KEYCLOAK_URI_MANAGEMENT, "   ");

        let mut settings = UiSettings::default();
        settings.change_pwd_uri = Some("https://from-document.example.com".to_string());
        apply_environment(&mut settings, &env);

        assert_eq!(settings.change_pwd_uri, None);
        assert_eq!(settings.kc_management_uri, None);
    }
}
