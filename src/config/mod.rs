use std::path::{Path, PathBuf};

use serde::Deserialize;

static CONFIG: OnceCell<Config> = OnceCell::const_new();

mod config_dir;
pub use config_dir::{find_config_file, read_config, read_config_from};

mod error;
pub use error::{ConfigError, ConfigResult};
use tokio::sync::OnceCell;

#[derive(Debug, Deserialize)]
pub struct Config {
    host: Host,
    #[serde(default)]
    app: App,
}

#[derive(Debug, Deserialize)]
pub struct Host {
    bindto: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct App {
    /// Serve the OpenAPI document and Swagger UI.
    #[serde(default)]
    docs: bool,
    /// Fixture file to load instead of the embedded seed.
    #[serde(default)]
    fixtures: Option<PathBuf>,
}

impl Config {
    #[tracing::instrument]
    pub async fn get_or_init(use_local: bool) -> &'static Config {
        CONFIG
            .get_or_init(|| async {
                let config = match Self::load(use_local) {
                    Ok(c) => c,
                    Err(e) => {
                        if !matches!(e, error::ConfigError::ConfigNotFound) {
                            crate::error::log_error(&e);
                        }
                        tracing::error!("Config not found.");
                        std::process::exit(1);
                    }
                };

                config
            })
            .await
    }

    pub fn load(use_local: bool) -> ConfigResult<Self> {
        let bytes = read_config(use_local)?;
        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> ConfigResult<Self> {
        let config: Self = toml::from_slice(bytes)?;
        Ok(config)
    }

    #[inline]
    pub fn host(&self) -> &Host {
        &self.host
    }

    #[inline]
    pub fn app(&self) -> &App {
        &self.app
    }
}

impl Host {
    #[inline]
    pub fn bindto(&self) -> &str {
        &self.bindto
    }
}

impl App {
    #[inline]
    pub fn docs(&self) -> bool {
        self.docs
    }

    #[inline]
    pub fn fixtures(&self) -> Option<&Path> {
        self.fixtures.as_deref()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn config_test() {
        let config = Config::get_or_init(true).await;
        assert_eq!(config.host().bindto(), "127.0.0.1:5000"); // defaults
    }

    #[test]
    fn app_section_is_optional() {
        let config = Config::from_slice(b"[host]\nbindto = \"0.0.0.0:8080\"\n").unwrap();
        assert_eq!(config.host().bindto(), "0.0.0.0:8080");
        assert!(!config.app().docs());
        assert!(config.app().fixtures().is_none());
    }

    #[test]
    fn fixtures_path() {
        let config = Config::from_slice(
            b"[host]\nbindto = \"127.0.0.1:1\"\n[app]\ndocs = true\nfixtures = \"data/catalog.json\"\n",
        )
        .unwrap();
        assert!(config.app().docs());
        assert_eq!(config.app().fixtures(), Some(Path::new("data/catalog.json")));
    }

    #[test]
    fn missing_host_is_error() {
        assert!(matches!(
            Config::from_slice(b"[app]\ndocs = true\n"),
            Err(ConfigError::TomlDeError(_))
        ));
    }
}
