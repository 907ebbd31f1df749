use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WorldConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

impl Validate for WorldConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("cell_size must be greater than 0".to_string());
        }
        if self.width == 0 || self.height == 0 {
            return Err("world width and height must be greater than 0".to_string());
        }
        if self.width % self.cell_size != 0 || self.height % self.cell_size != 0 {
            return Err("world width and height must be multiples of cell_size".to_string());
        }
        if self.width > 8192 || self.height > 8192 {
            return Err("world dimensions must not exceed 8192".to_string());
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            cell_size: 32,
        }
    }
}
