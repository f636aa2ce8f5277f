use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::client::DokployClient;
use crate::error::{DokployError, Result};

pub const HOST_ENV: &str = "DOKPLOY_HOST";
pub const API_KEY_ENV: &str = "DOKPLOY_API_KEY";

/// Connection settings for a Dokploy server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the API, e.g. `https://dokploy.example.com/api`
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub api_key: String,
}

impl ProviderConfig {
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DokployError::Config("Could not determine home directory".to_string()))?;
        Ok(home.join(".config").join("dokploy"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }

    /// Load the config file, falling back to the environment alone when no
    /// file exists. Environment variables always win over the file.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            tracing::debug!("No config file at {}", path.display());
            Self::default()
        };

        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| DokployError::Config(format!("Invalid config: {}", e)))
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup(HOST_ENV).filter(|v| !v.is_empty()) {
            self.host = host;
        }
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.api_key = key;
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| DokployError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(DokployError::Config(format!(
                "host is not set. Run 'dokploy init' or set {}",
                HOST_ENV
            )));
        }
        if !(self.host.starts_with("http://") || self.host.starts_with("https://")) {
            return Err(DokployError::Config(format!(
                "host must start with http:// or https://, got '{}'",
                self.host
            )));
        }
        if self.api_key.is_empty() {
            return Err(DokployError::Config(format!(
                "api_key is not set. Run 'dokploy init' or set {}",
                API_KEY_ENV
            )));
        }
        Ok(())
    }

    /// Validated client for these settings.
    pub fn client(&self) -> Result<DokployClient> {
        self.validate()?;
        Ok(DokployClient::new(&self.host, &self.api_key)?)
    }

    /// API key with all but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let count = self.api_key.chars().count();
        if count <= 4 {
            return "*".repeat(count);
        }
        let tail: String = self.api_key.chars().skip(count - 4).collect();
        format!("{}{}", "*".repeat(count - 4), tail)
    }
}
