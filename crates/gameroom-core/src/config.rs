use serde::Deserialize;

use crate::error::RegistryError;

/// File the process-wide registry reads its settings from, relative to the
/// working directory.
pub const CONFIG_FILE: &str = "gameroom.toml";

/// Largest number of games a registry reserves space for up front. Larger
/// `initial_capacity` values are clamped to this.
pub const MAX_INITIAL_CAPACITY: usize = 65_536;

/// Registry tuning, loaded from `gameroom.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Number of games to reserve space for up front.
    pub initial_capacity: usize,
    /// Emit trace events for lookups that find nothing.
    pub log_lookups: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            log_lookups: false,
        }
    }
}

impl RegistryConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, RegistryError> {
        toml::from_str(content).map_err(|e| RegistryError::Config(e.to_string()))
    }

    /// Load config from `gameroom.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded registry configuration from {CONFIG_FILE}");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse {CONFIG_FILE}: {e}, using defaults");
                    Self::default()
                },
            },
            Err(_) => {
                tracing::debug!("No {CONFIG_FILE} found, using defaults");
                Self::default()
            },
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply `GAMEROOM_*` overrides. `lookup` resolves a variable name to its
    /// value; unparsable values are ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("GAMEROOM_INITIAL_CAPACITY") {
            match val.parse::<usize>() {
                Ok(n) => self.initial_capacity = n,
                Err(_) => tracing::warn!(value = %val, "Ignoring invalid GAMEROOM_INITIAL_CAPACITY"),
            }
        }
        if let Some(val) = lookup("GAMEROOM_LOG_LOOKUPS") {
            match val.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.log_lookups = true,
                "0" | "false" | "no" | "off" => self.log_lookups = false,
                _ => tracing::warn!(value = %val, "Ignoring invalid GAMEROOM_LOG_LOOKUPS"),
            }
        }
    }

    /// Capacity the registry actually reserves: `initial_capacity` clamped to
    /// [`MAX_INITIAL_CAPACITY`].
    pub fn effective_capacity(&self) -> usize {
        self.initial_capacity.min(MAX_INITIAL_CAPACITY)
    }

    /// Check for suspicious settings. Returns one message per problem found.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            warnings.push(format!(
                "initial_capacity {} exceeds {MAX_INITIAL_CAPACITY}, reserving {MAX_INITIAL_CAPACITY} instead",
                self.initial_capacity
            ));
        }
        for w in &warnings {
            tracing::warn!("{w}");
        }
        warnings
    }
}
