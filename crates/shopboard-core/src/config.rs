//! Board credentials and dashboard timing configuration.

use std::time::Duration;

use crate::error::{BoardError, Result};

/// Default board API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.trello.com/1";

/// Default title shown when the board loads successfully.
pub const DEFAULT_BOARD_TITLE: &str = "Workshop Yard";

/// Vehicles per kiosk page.
pub const PAGE_SIZE: usize = 6;

/// Default interval between board refreshes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Default interval between page flips.
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(10);

/// Longest accepted refresh or rotation interval.
pub const MAX_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Environment variables for each credential, preferred name first.
const API_KEY_VARS: [&str; 2] = ["TRELLO_API_KEY", "VITE_TRELLO_API_KEY"];
const TOKEN_VARS: [&str; 2] = ["TRELLO_TOKEN", "VITE_TRELLO_TOKEN"];
const BOARD_ID_VARS: [&str; 2] = ["TRELLO_BOARD_ID", "VITE_TRELLO_BOARD_ID"];

/// Credentials for the board API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardCredentials {
    pub api_key: String,
    pub token: String,
    pub board_id: String,
}

impl BoardCredentials {
    pub fn new(
        api_key: impl Into<String>,
        token: impl Into<String>,
        board_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            token: token.into(),
            board_id: board_id.into(),
        }
    }

    /// Read credentials through `lookup`, trying each variable name in turn.
    ///
    /// Blank values are skipped so an empty preferred variable does not mask
    /// a populated fallback.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| lookup(name))
                .find(|value| !value.trim().is_empty())
                .unwrap_or_default()
        };

        Self {
            api_key: first(&API_KEY_VARS[..]),
            token: first(&TOKEN_VARS[..]),
            board_id: first(&BOARD_ID_VARS[..]),
        }
    }

    /// Read credentials from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Names of the credentials that are missing or blank.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (API_KEY_VARS[0], &self.api_key),
            (TOKEN_VARS[0], &self.token),
            (BOARD_ID_VARS[0], &self.board_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Fail with a configuration error unless every credential is present.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Configuration` listing the missing variables.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(BoardError::configuration(format!(
                "missing {}",
                missing.join(", ")
            )))
        }
    }
}

/// Source of credentials, consulted once per refresh cycle.
///
/// Re-reading on every cycle means a kiosk started before the environment
/// was fixed recovers on the next refresh without a restart.
pub trait CredentialProvider: Send + Sync {
    fn credentials(&self) -> BoardCredentials;
}

/// Reads credentials from environment variables on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialProvider for EnvCredentials {
    fn credentials(&self) -> BoardCredentials {
        BoardCredentials::from_env()
    }
}

impl CredentialProvider for BoardCredentials {
    fn credentials(&self) -> BoardCredentials {
        self.clone()
    }
}

/// Timing and layout settings for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Interval between board refreshes
    pub refresh_interval: Duration,
    /// Interval between page flips
    pub rotation_interval: Duration,
    /// Vehicles per page
    pub page_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            rotation_interval: DEFAULT_ROTATION_INTERVAL,
            page_size: PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_prefers_primary_names() {
        let creds = BoardCredentials::from_lookup(lookup_from(&[
            ("TRELLO_API_KEY", "key"),
            ("VITE_TRELLO_API_KEY", "old-key"),
            ("TRELLO_TOKEN", "token"),
            ("TRELLO_BOARD_ID", "board"),
        ]));
        assert_eq!(creds, BoardCredentials::new("key", "token", "board"));
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_falls_back_to_vite_names() {
        let creds = BoardCredentials::from_lookup(lookup_from(&[
            ("TRELLO_API_KEY", "  "),
            ("VITE_TRELLO_API_KEY", "key"),
            ("VITE_TRELLO_TOKEN", "token"),
            ("VITE_TRELLO_BOARD_ID", "board"),
        ]));
        assert_eq!(creds, BoardCredentials::new("key", "token", "board"));
    }

    #[test]
    fn test_missing_credentials_are_listed() {
        let creds = BoardCredentials::new("key", "", " ");
        assert_eq!(creds.missing(), vec!["TRELLO_TOKEN", "TRELLO_BOARD_ID"]);

        let err = creds.validate().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("TRELLO_TOKEN, TRELLO_BOARD_ID"));
    }

    #[test]
    fn test_all_blank_credentials() {
        let creds = BoardCredentials::new("", "", "");
        assert_eq!(creds.missing().len(), 3);
    }

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
        assert_eq!(config.rotation_interval, Duration::from_secs(10));
    }
}
