use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub log_level: String,
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
            banner: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Loads configuration from the process environment.
pub fn load() -> Result<Config, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Defaults, then the TOML file named by `LOTTO_CONFIG`, then `LOTTO_*`
/// variables. Empty variables are ignored.
pub fn load_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

    let mut cfg = Config::default();
    if let Some(path) = var("LOTTO_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.log_level {
            cfg.log_level = v;
        }
        if let Some(v) = f.banner {
            cfg.banner = v;
        }
    }

    if let Some(level) = var("LOTTO_LOG") {
        cfg.log_level = level;
    }
    if let Some(banner) = var("LOTTO_BANNER") {
        cfg.banner =
            parse_bool(&banner).ok_or_else(|| ConfigError::Invalid("Invalid banner".into()))?;
    }

    validate(&cfg)?;
    Ok(cfg)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    log_level: Option<String>,
    #[serde(default)]
    banner: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Err(e) = EnvFilter::try_new(&cfg.log_level) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: log_level {:?}: {}",
            cfg.log_level, e
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
