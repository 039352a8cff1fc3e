use config::{Config, ConfigBuilder, FileFormat, builder::DefaultState};
use serde::Deserialize;

use crate::error::CoreResult;
use crate::types::KeyMatching;

/// Prefix for environment overrides, e.g. `VCARDKIT_LOGGING__LEVEL=trace`.
pub const ENV_PREFIX: &str = "VCARDKIT";

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub parser: ParserConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub key_matching: KeyMatching,
    pub enforce_version: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            key_matching: KeyMatching::default(),
            enforce_version: true,
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables and `config.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        let settings = Self::defaults()?
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        tracing::debug!(settings = ?settings, "Settings loaded");

        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from defaults overlaid with a TOML document.
    ///
    /// ## Errors
    /// Returns an error if the TOML is malformed or holds values of the wrong type.
    pub fn from_toml_str(toml: &str) -> CoreResult<Self> {
        Ok(Self::defaults()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?)
    }

    fn defaults() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("parser.key_matching", KeyMatching::default().as_str())?
            .set_default("parser.enforce_version", true)?)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` and `config.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
