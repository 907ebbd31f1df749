use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Initial window size as a multiple of the world size.
    pub window_scale: f32,
    #[serde(default)]
    pub show_grid: bool,
    #[serde(default = "default_show_fps")]
    pub show_fps: bool,
}

fn default_show_fps() -> bool {
    true
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0.25..=8.0).contains(&self.window_scale) {
            return Err("window_scale must be between 0.25 and 8".to_string());
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_scale: 2.0,
            show_grid: false,
            show_fps: true,
        }
    }
}
