//! Suite configuration loaded from YAML

use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Credentials keyed by model identifier
    #[serde(default)]
    pub models: HashMap<String, Credentials>,

    /// API endpoint parameters
    #[serde(default)]
    pub api: ApiConfig,
}

impl SuiteConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.api.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Look up the credential set for a model
    pub fn credentials(&self, model: &str) -> Result<&Credentials> {
        self.models.get(model).ok_or_else(|| Error::InvalidModelType {
            model: model.to_string(),
        })
    }
}

/// Account credentials for one model
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Endpoint parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// URL scheme including `://`
    pub protocol: String,

    /// Base domain appended after the subdomain, with leading dot
    pub base_domain: String,

    /// Subdomain used for the auth handshake
    pub login_subdomain: String,

    /// Per-request timeout
    pub timeout_secs: u64,

    /// DNS overrides (hostname -> address), port in the address is ignored
    pub resolve: HashMap<String, SocketAddr>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            protocol: "https://".to_string(),
            base_domain: ".eagleeyenetworks.com".to_string(),
            login_subdomain: "login".to_string(),
            timeout_secs: 30,
            resolve: HashMap::new(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.protocol.ends_with("://") {
            return Err(Error::Config(format!(
                "protocol must end with '://', got '{}'",
                self.protocol
            )));
        }
        if !self.base_domain.starts_with('.') {
            return Err(Error::Config(format!(
                "base_domain must start with '.', got '{}'",
                self.base_domain
            )));
        }
        if self.login_subdomain.is_empty() {
            return Err(Error::Config("login_subdomain is empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_models() {
        let yaml = r#"
models:
  DS100:
    username: qa@example.com
    password: hunter2
  DS200:
    username: other@example.com
    password: secret
"#;
        let config = SuiteConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.models.len(), 2);
        let creds = config.credentials("DS100").unwrap();
        assert_eq!(creds.username, "qa@example.com");
        assert_eq!(config.api.protocol, "https://");
        assert_eq!(config.api.base_domain, ".eagleeyenetworks.com");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_unknown_model_is_invalid_model_type() {
        let config = SuiteConfig::from_yaml("models: {}").unwrap();
        let err = config.credentials("DS999").unwrap_err();
        assert!(matches!(err, Error::InvalidModelType { model } if model == "DS999"));
    }

    #[test]
    fn test_api_overrides() {
        let yaml = r#"
models: {}
api:
  protocol: "http://"
  base_domain: ".een.test:8080"
  timeout_secs: 5
  resolve:
    login.een.test: "127.0.0.1:8080"
"#;
        let config = SuiteConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.api.protocol, "http://");
        assert_eq!(config.api.login_subdomain, "login");
        assert_eq!(config.api.resolve.len(), 1);
    }

    #[test]
    fn test_rejects_bad_base_domain() {
        let yaml = r#"
api:
  base_domain: "eagleeyenetworks.com"
"#;
        assert!(matches!(
            SuiteConfig::from_yaml(yaml),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_password_is_redacted() {
        let creds = Credentials {
            username: "u".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("hunter2"));
    }
}
