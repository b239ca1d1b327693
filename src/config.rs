//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use knights_engine::{EngineConfig, Layout, SettleDelays};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Host configuration: engine rules plus an optional opening layout.
///
/// ```toml
/// [engine]
/// board_size = 8
/// refill = "draw_one"
///
/// [layout]
/// player = [7, 4]
/// enemies = [[5, 3]]
///
/// [[layout.deck]]
/// name = "Knight"
/// upgrades = ["stamina_1"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rules configuration.
    #[serde(default)]
    engine: EngineConfig,

    /// Opening layout; the built-in layout is used when absent.
    #[serde(default)]
    layout: Option<Layout>,
}

impl GameConfig {
    /// Creates a configuration from parts.
    #[instrument(skip_all)]
    pub fn new(engine: EngineConfig, layout: Option<Layout>) -> Self {
        Self { engine, layout }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            board_size = %config.engine.board_size(),
            custom_layout = config.layout.is_some(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns the configured layout or the built-in one.
    pub fn layout_or_default(&self) -> Layout {
        self.layout.clone().unwrap_or_default()
    }

    /// Drops the settle delays so moves finalize at once.
    pub fn without_delays(mut self) -> Self {
        self.engine = self.engine.with_settle(SettleDelays::immediate());
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
