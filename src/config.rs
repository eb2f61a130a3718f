//! Wiki configuration
//!
//! Read from a JSON file; every field has a default, so `{}` is a valid
//! configuration. Core components never read this directly: the server
//! turns it into constructor arguments.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wiki::{EditPolicy, PagePolicy, Title};

/// Result type for configuration handling
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Wiki configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding one `<title>.txt` per page (default: "./data")
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory holding the `*.html` templates (default: "./templates")
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// Landing page title (default: "FrontPage")
    #[serde(default = "default_front_page")]
    pub front_page: String,

    /// Template the landing page renders with (default: "front")
    #[serde(default = "default_front_template")]
    pub front_template: String,

    /// Report storage failures on edit instead of showing an empty form
    #[serde(default)]
    pub strict_edit: bool,

    /// Largest accepted request body in bytes (default: 2 MiB)
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("./templates")
}

fn default_front_page() -> String {
    "FrontPage".to_string()
}

fn default_front_template() -> String {
    "front".to_string()
}

fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_dir: default_data_dir(),
            template_dir: default_template_dir(),
            front_page: default_front_page(),
            front_template: default_front_template(),
            strict_edit: false,
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl WikiConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Load configuration from file, falling back to defaults if it is absent
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            let config = Self::default();
            config.validate()?;
            Ok(config)
        }
    }

    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: WikiConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be > 0".into()));
        }

        if !Title::is_valid(&self.front_page) {
            return Err(ConfigError::Invalid(format!(
                "front_page '{}' is not a valid page title",
                self.front_page
            )));
        }

        if self.front_template.trim().is_empty() {
            return Err(ConfigError::Invalid("front_template must not be empty".into()));
        }

        if self.max_body_bytes == 0 {
            return Err(ConfigError::Invalid("max_body_bytes must be > 0".into()));
        }

        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Routing policy derived from the front page and edit settings
    pub fn page_policy(&self) -> ConfigResult<PagePolicy> {
        let front_page = Title::parse(&self.front_page)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        let edit = if self.strict_edit {
            EditPolicy::Strict
        } else {
            EditPolicy::Lenient
        };
        Ok(PagePolicy::new(front_page, self.front_template.clone(), edit))
    }

    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = WikiConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.front_page, "FrontPage");
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = WikiConfig::from_json("{}").unwrap();
        assert_eq!(config, WikiConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config =
            WikiConfig::from_json(r#"{"port": 9000, "data_dir": "/srv/wiki", "strict_edit": true}"#)
                .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.data_dir, PathBuf::from("/srv/wiki"));
        assert_eq!(config.page_policy().unwrap().edit(), EditPolicy::Strict);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            WikiConfig::from_json(r#"{"port": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            WikiConfig::from_json(r#"{"front_page": "../etc"}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            WikiConfig::from_json(r#"{"front_template": " "}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            WikiConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_round_trip_through_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tinywiki.json");

        let mut config = WikiConfig::default();
        config.front_page = "Home".into();
        fs::write(&path, config.to_json_pretty().unwrap()).unwrap();

        assert_eq!(WikiConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp = TempDir::new().unwrap();
        let config = WikiConfig::load_or_default(&temp.path().join("absent.json")).unwrap();
        assert_eq!(config, WikiConfig::default());

        assert!(matches!(
            WikiConfig::load(&temp.path().join("absent.json")),
            Err(ConfigError::Read { .. })
        ));
    }
}
