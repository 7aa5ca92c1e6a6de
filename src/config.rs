use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub yelp: YelpSettings,
    pub geocode: GeocodeSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YelpSettings {
    #[serde(default = "default_yelp_base_url")]
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeSettings {
    #[serde(default = "default_geocode_base_url")]
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_country_code")]
    pub country_code: String,
}

fn default_yelp_base_url() -> String {
    "https://api.yelp.com/v3".to_string()
}

fn default_geocode_base_url() -> String {
    "https://api.opencagedata.com".to_string()
}

fn default_country_code() -> String {
    "us".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with NOMS_)
    ///
    /// Both upstream API keys are mandatory; loading fails when either is
    /// missing or empty so the service never starts with placeholder
    /// credentials.
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with NOMS_)
            // e.g., NOMS_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("NOMS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate_credentials()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("NOMS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate_credentials()?;
        Ok(settings)
    }

    fn validate_credentials(&self) -> Result<(), ConfigError> {
        validate_api_key("yelp.api_key", &self.yelp.api_key)?;
        validate_api_key("geocode.api_key", &self.geocode.api_key)?;
        Ok(())
    }
}

/// Reject absent or obviously-unconfigured credentials at startup.
fn validate_api_key(name: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() || value.starts_with("your-") {
        return Err(ConfigError::Message(format!(
            "{} is not configured; set it via the environment before starting",
            name
        )));
    }
    Ok(())
}

/// Substitute well-known environment variables in config values
///
/// The deployment environment supplies secrets as YELP_API_KEY and
/// GEOCODE_API_KEY; they override anything in the config files.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let yelp_api_key = env::var("YELP_API_KEY")
        .or_else(|_| env::var("NOMS_YELP__API_KEY"))
        .ok();
    let geocode_api_key = env::var("GEOCODE_API_KEY")
        .or_else(|_| env::var("NOMS_GEOCODE__API_KEY"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = yelp_api_key {
        builder = builder.set_override("yelp.api_key", api_key)?;
    }
    if let Some(api_key) = geocode_api_key {
        builder = builder.set_override("geocode.api_key", api_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_default_base_urls() {
        assert_eq!(default_yelp_base_url(), "https://api.yelp.com/v3");
        assert_eq!(default_geocode_base_url(), "https://api.opencagedata.com");
        assert_eq!(default_country_code(), "us");
    }

    #[test]
    fn test_placeholder_credentials_are_rejected() {
        assert!(validate_api_key("yelp.api_key", "").is_err());
        assert!(validate_api_key("yelp.api_key", "   ").is_err());
        assert!(validate_api_key("yelp.api_key", "your-yelp-api-key-here").is_err());
        assert!(validate_api_key("yelp.api_key", "real-key-value").is_ok());
    }
}
