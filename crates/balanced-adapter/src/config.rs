/*
[INPUT]:  Stage directory holding balanced.conf, BALANCED_* environment variables
[OUTPUT]: Parsed stage configuration and client environment
[POS]:    Configuration layer - deployment stage setup
[UPDATE]: When adding new configuration keys
*/

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http::{BalancedError, DEFAULT_API_ROOT, Environment, Result};

/// File name looked up inside a stage directory
pub const STAGE_FILE: &str = "balanced.conf";

pub const ENV_API_ROOT: &str = "BALANCED_API_ROOT";
pub const ENV_API_KEY: &str = "BALANCED_API_KEY";
pub const ENV_MARKETPLACE_ID: &str = "BALANCED_MARKETPLACE_ID";

/// Connection settings of one deployment stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StageConfig {
    #[serde(default)]
    pub balanced_api_root: Option<String>,
    #[serde(default)]
    pub balanced_api_key: Option<String>,
    #[serde(default)]
    pub balanced_marketplace_id: Option<String>,
}

impl StageConfig {
    /// Path of the config file for `stage`
    pub fn stage_path(stage: impl AsRef<Path>) -> PathBuf {
        stage.as_ref().join(STAGE_FILE)
    }

    /// Load `{stage}/balanced.conf` and apply environment overrides
    pub fn load(stage: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::from_file(Self::stage_path(stage))?;
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Load configuration from a YAML (or JSON) file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| {
            BalancedError::Config(format!("failed to read {}: {err}", path.display()))
        })?;
        Self::from_yaml(&content)
            .map_err(|err| BalancedError::Config(format!("{}: {err}", path.display())))
    }

    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Replace file values with non-empty values from `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());
        if let Some(root) = get(ENV_API_ROOT) {
            self.balanced_api_root = Some(root);
        }
        if let Some(key) = get(ENV_API_KEY) {
            self.balanced_api_key = Some(key);
        }
        if let Some(id) = get(ENV_MARKETPLACE_ID) {
            self.balanced_marketplace_id = Some(id);
        }
    }

    pub fn to_environment(&self) -> Environment {
        let api_root = self
            .balanced_api_root
            .as_deref()
            .filter(|root| !root.is_empty())
            .unwrap_or(DEFAULT_API_ROOT);
        Environment::new(
            api_root,
            self.balanced_api_key.clone(),
            self.balanced_marketplace_id.clone(),
        )
    }
}

impl From<&StageConfig> for Environment {
    fn from(config: &StageConfig) -> Self {
        config.to_environment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn temp_stage() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("balanced-stage-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_json_stage_file() {
        let stage = temp_stage();
        std::fs::write(
            StageConfig::stage_path(&stage),
            r#"{"balanced_api_root": "https://api.balancedpayments.com",
                "balanced_api_key": "ak-prod-1",
                "balanced_marketplace_id": "MP1"}"#,
        )
        .unwrap();

        let config = StageConfig::from_file(StageConfig::stage_path(&stage)).unwrap();
        assert_eq!(config.balanced_api_key.as_deref(), Some("ak-prod-1"));

        let env = config.to_environment();
        assert_eq!(env.api_root(), "https://api.balancedpayments.com");
        assert_eq!(env.marketplace_id(), Some("MP1"));

        std::fs::remove_dir_all(stage).ok();
    }

    #[test]
    fn test_yaml_with_missing_root_uses_default() {
        let config = StageConfig::from_yaml("balanced_api_key: ak-test\n").unwrap();
        let env = Environment::from(&config);
        assert_eq!(env.api_root(), DEFAULT_API_ROOT);
        assert_eq!(env.api_key(), Some("ak-test"));
        assert!(env.marketplace_id().is_none());
    }

    #[test]
    fn test_missing_stage_file_is_config_error() {
        let stage = temp_stage();
        let err = StageConfig::load(&stage).unwrap_err();
        assert!(matches!(err, BalancedError::Config(msg) if msg.contains(STAGE_FILE)));
        std::fs::remove_dir_all(stage).ok();
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = StageConfig {
            balanced_api_root: Some("http://localhost:5000".to_string()),
            balanced_api_key: Some("ak-file".to_string()),
            balanced_marketplace_id: Some("MP-file".to_string()),
        };
        let vars: HashMap<&str, &str> =
            [(ENV_API_KEY, "ak-env"), (ENV_MARKETPLACE_ID, "")].into_iter().collect();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.balanced_api_root.as_deref(), Some("http://localhost:5000"));
        assert_eq!(config.balanced_api_key.as_deref(), Some("ak-env"));
        assert_eq!(config.balanced_marketplace_id.as_deref(), Some("MP-file"));
    }
}
