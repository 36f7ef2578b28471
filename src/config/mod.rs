// ABOUTME: Configuration types and parsing for slipway.yml.
// ABOUTME: Handles YAML parsing, discovery, and template generation.

use crate::error::{Error, Result};
use crate::types::SlotName;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "slipway.yml";
pub const CONFIG_FILENAME_ALT: &str = "slipway.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".slipway/config.yml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// App Service application name.
    pub app: String,

    /// Resource group the app lives in.
    pub resource_group: String,

    /// Staging slot deployments land in before any swap.
    #[serde(deserialize_with = "deserialize_slot_name")]
    pub slot: SlotName,

    #[serde(default)]
    pub health: HealthConfig,

    /// Slot prod-mode deployments swap into.
    #[serde(
        default = "default_swap_target",
        deserialize_with = "deserialize_slot_name"
    )]
    pub swap_target: SlotName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthConfig {
    /// Path probed on the slot's hostname.
    #[serde(default = "default_health_path")]
    pub path: String,

    /// Version marker the health endpoint must expose. Absent means plain
    /// liveness checking.
    #[serde(default)]
    pub expected_version: Option<String>,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            path: default_health_path(),
            expected_version: None,
        }
    }
}

fn default_health_path() -> String {
    "/".to_string()
}

fn default_swap_target() -> SlotName {
    SlotName::production()
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    pub fn template() -> Self {
        Config {
            app: "my-app".to_string(),
            resource_group: "my-rg".to_string(),
            slot: SlotName::new("staging").expect("template slot name is valid"),
            health: HealthConfig::default(),
            swap_target: SlotName::production(),
        }
    }
}

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let config = Config::template();
    std::fs::write(&config_path, generate_template_yaml(&config))?;

    Ok(())
}

fn generate_template_yaml(config: &Config) -> String {
    format!(
        r#"app: {}
resource_group: {}
slot: {}
health:
  path: {}
"#,
        config.app, config.resource_group, config.slot, config.health.path
    )
}

fn deserialize_slot_name<'de, D>(deserializer: D) -> std::result::Result<SlotName, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    SlotName::new(&s).map_err(serde::de::Error::custom)
}
