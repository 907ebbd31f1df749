use common::config::Validate;
use common::snake::ApplePlacement;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameplayConfig {
    pub move_interval_secs: f32,
    pub points_per_apple: u32,
    #[serde(default)]
    pub apple_placement: ApplePlacement,
}

impl Validate for GameplayConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.move_interval_secs.is_finite() || self.move_interval_secs <= 0.0 {
            return Err("move_interval_secs must be a positive number".to_string());
        }
        if self.move_interval_secs > 60.0 {
            return Err("move_interval_secs must not exceed 60".to_string());
        }
        Ok(())
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            move_interval_secs: 1.0,
            points_per_apple: 20,
            apple_placement: ApplePlacement::Original,
        }
    }
}
