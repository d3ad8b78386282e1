// File: src/config.rs
// Purpose: Configuration parsing from signup.toml plus environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use signup_types::FormVariant;
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub assets: AssetsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Registration form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Which field set the register page shows (default: basic)
    #[serde(default)]
    pub variant: FormVariant,

    /// Mounted forms kept in memory before the oldest is evicted
    #[serde(default = "default_max_open_forms")]
    pub max_open_forms: usize,
}

/// Front-end assets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_htmx_src")]
    pub htmx_src: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_open_forms() -> usize {
    1024
}

fn default_htmx_src() -> String {
    "https://unpkg.com/htmx.org@1.9.12".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            variant: FormVariant::default(),
            max_open_forms: default_max_open_forms(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            htmx_src: default_htmx_src(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("signup.toml")
    }

    /// Apply `SIGNUP_HOST`, `SIGNUP_PORT` and `SIGNUP_FORM_VARIANT`
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup("SIGNUP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SIGNUP_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("SIGNUP_PORT is not a port number: {:?}", port))?;
        }
        if let Some(variant) = lookup("SIGNUP_FORM_VARIANT") {
            self.form.variant = variant.parse()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.address(), "127.0.0.1:3000");
        assert_eq!(config.form.variant, FormVariant::Basic);
        assert_eq!(config.form.max_open_forms, 1024);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert!(config.assets.htmx_src.contains("htmx"));
    }

    #[test]
    fn test_extended_form() {
        let toml = r#"
            [server]
            port = 8080

            [form]
            variant = "extended"
            max_open_forms = 16
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.form.variant, FormVariant::Extended);
        assert_eq!(config.form.max_open_forms, 16);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("does/not/exist/signup.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("SIGNUP_HOST", "0.0.0.0"),
            ("SIGNUP_PORT", "4000"),
            ("SIGNUP_FORM_VARIANT", "Extended"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.server.address(), "0.0.0.0:4000");
        assert_eq!(config.form.variant, FormVariant::Extended);
    }

    #[test]
    fn test_bad_env_port() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(|key| (key == "SIGNUP_PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("SIGNUP_PORT"));
    }
}
