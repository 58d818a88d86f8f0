//! Login configuration
//!
//! Defaults are compiled in; a deployment may override them by storing a JSON
//! `LoginConfig` in browser local storage under [`CONFIG_STORAGE_KEY`].

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::console_warn;
use crate::features::login::{Denylist, BANNED_INSTANCES};
use crate::services::errors::{ConfigError, ConfigResult};

pub const CONFIG_STORAGE_KEY: &str = "login_config";

/// Longest password prefix sent to the server.
pub const MAX_PASSWORD_CHARS: usize = 60;

/// Quick-pick instances offered by the instance selector, in display order.
pub const DEFAULT_LEMMY_INSTANCES: &[&str] = &[
    "beehaw.org",
    "feddit.de",
    "feddit.it",
    "lemmy.ca",
    "lemmy.ml",
    "lemmy.one",
    "lemmy.world",
    "lemmygrad.ml",
    "midwest.social",
    "mujico.org",
    "programming.dev",
    "sh.itjust.works",
    "slrpnk.net",
    "sopuli.xyz",
    "szmer.info",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    pub suggested_instances: Vec<String>,
    pub banned_instances: Vec<String>,
    pub max_password_chars: usize,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            suggested_instances: DEFAULT_LEMMY_INSTANCES.iter().map(|s| s.to_string()).collect(),
            banned_instances: BANNED_INSTANCES.iter().map(|s| s.to_string()).collect(),
            max_password_chars: MAX_PASSWORD_CHARS,
        }
    }
}

impl LoginConfig {
    pub fn denylist(&self) -> Denylist {
        Denylist::new(self.banned_instances.iter().cloned())
    }

    /// Reject values the login form cannot work with.
    pub fn validated(self) -> ConfigResult<Self> {
        if self.max_password_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_password_chars".to_string(),
                value: self.max_password_chars.to_string(),
            });
        }
        Ok(self)
    }

    /// Load the stored override, falling back to defaults on any problem.
    pub fn load() -> Self {
        Self::from_stored(LocalStorage::get(CONFIG_STORAGE_KEY)).unwrap_or_else(|e| {
            console_warn!("[Config] Ignoring stored login config: {}", e);
            Self::default()
        })
    }

    /// Decide what a local storage read yields. A missing key means defaults.
    fn from_stored(stored: Result<Self, StorageError>) -> ConfigResult<Self> {
        match stored {
            Ok(config) => config.validated(),
            Err(StorageError::KeyNotFound(_)) => Ok(Self::default()),
            Err(StorageError::SerdeError(e)) => Err(ConfigError::Malformed {
                key: CONFIG_STORAGE_KEY.to_string(),
                reason: e.to_string(),
            }),
            Err(e) => Err(ConfigError::StorageUnavailable {
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoginConfig::default();
        assert_eq!(config.max_password_chars, 60);
        assert!(config.suggested_instances.iter().any(|i| i == "lemmy.ml"));
        assert!(config.denylist().contains("wolfballs.com"));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: LoginConfig =
            serde_json::from_str(r#"{ "banned_instances": ["spam.example"] }"#).unwrap();
        assert_eq!(config.banned_instances, vec!["spam.example".to_string()]);
        assert_eq!(config.max_password_chars, MAX_PASSWORD_CHARS);
        assert_eq!(config.suggested_instances.len(), DEFAULT_LEMMY_INSTANCES.len());
        assert!(!config.denylist().contains("wolfballs.com"));
    }

    #[test]
    fn test_zero_password_cap_is_rejected() {
        let config = LoginConfig {
            max_password_chars: 0,
            ..LoginConfig::default()
        };
        assert!(matches!(
            config.validated(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_missing_key_uses_defaults() {
        let stored = Err(StorageError::KeyNotFound(CONFIG_STORAGE_KEY.to_string()));
        assert_eq!(LoginConfig::from_stored(stored), Ok(LoginConfig::default()));
    }

    #[test]
    fn test_malformed_json_falls_back_to_defaults() {
        let bad = serde_json::from_str::<LoginConfig>("{ not json").unwrap_err();
        let result = LoginConfig::from_stored(Err(StorageError::SerdeError(bad)));
        assert!(matches!(result, Err(ConfigError::Malformed { ref key, .. }) if key == CONFIG_STORAGE_KEY));
        assert_eq!(result.unwrap_or_default(), LoginConfig::default());
    }

    #[test]
    fn test_stored_zero_cap_falls_back_to_defaults() {
        let stored = LoginConfig {
            max_password_chars: 0,
            banned_instances: vec!["spam.example".to_string()],
            ..LoginConfig::default()
        };
        let result = LoginConfig::from_stored(Ok(stored));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        assert_eq!(result.unwrap_or_default(), LoginConfig::default());
    }

    #[test]
    fn test_valid_stored_override_is_kept() {
        let stored = LoginConfig {
            suggested_instances: vec!["lemmy.ml".to_string()],
            banned_instances: Vec::new(),
            max_password_chars: 32,
        };
        assert_eq!(LoginConfig::from_stored(Ok(stored.clone())), Ok(stored));
    }
}
