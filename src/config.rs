use crate::constants::{NWS_API_BASE, USER_AGENT};

/// Environment variable overriding the upstream base URL
pub const API_BASE_VAR: &str = "NWS_API_BASE";

/// Environment variable overriding the user agent
pub const USER_AGENT_VAR: &str = "NWS_USER_AGENT";

/// Runtime settings for the upstream weather API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Loads settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup, falling back to defaults
    /// for missing or blank values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            api_base: read(API_BASE_VAR)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            user_agent: read(USER_AGENT_VAR).unwrap_or(defaults.user_agent),
        }
    }

    /// Overrides the base URL, mainly for pointing at a local stand-in
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }
}
