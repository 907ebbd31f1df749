use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::snake::WorldSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{DisplayConfig, GameplayConfig, WorldConfig};
use crate::constants::CONFIG_FILE_NAME;

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path_override: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path_override.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub world: WorldConfig,
    pub gameplay: GameplayConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn world_settings(&self) -> WorldSettings {
        WorldSettings {
            width: self.world.width as i32,
            height: self.world.height as i32,
            cell_size: self.world.cell_size as i32,
            move_interval: self.gameplay.move_interval_secs,
            points_per_apple: self.gameplay.points_per_apple,
            apple_placement: self.gameplay.apple_placement,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.world.validate()?;
        self.gameplay.validate()?;
        self.display.validate()?;
        self.world_settings().validate()?;
        Ok(())
    }
}
