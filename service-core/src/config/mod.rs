use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;

/// Settings shared by every service binary.
///
/// Sources, lowest precedence first: built-in defaults, an optional `configuration`
/// file (any format the `config` crate understands), then `APP__*` environment
/// variables. A `.env` file is loaded into the environment before reading.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::load_from("configuration")
    }

    /// Load without touching `.env`, reading the optional file at `file_stem`.
    pub fn load_from(file_stem: &str) -> Result<Self, AppError> {
        let config = Cfg::builder()
            .add_source(File::with_name(file_stem).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load_from("does-not-exist/configuration").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_overrides_default_port() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "port = 9191").unwrap();

        let stem = dir.path().join("settings");
        let config = Config::load_from(stem.to_str().unwrap()).unwrap();
        assert_eq!(config.port, 9191);
    }
}
