use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::Position;

/// Rule used to reject a freshly rolled apple cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplePlacement {
    /// Re-roll only when the cell is on the head *and* on a body segment.
    /// Apples may therefore spawn under the body; kept for parity with the classic game.
    #[default]
    Original,
    /// Re-roll when the cell is on the head or on any body segment.
    AvoidSnake,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorldSettings {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub move_interval: f32,
    pub points_per_apple: u32,
    pub apple_placement: ApplePlacement,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            cell_size: 32,
            move_interval: 1.0,
            points_per_apple: 20,
            apple_placement: ApplePlacement::Original,
        }
    }
}

impl WorldSettings {
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Wraps each axis independently onto the torus.
    pub fn wrap(&self, position: Position) -> Position {
        Position::new(
            Self::wrap_axis(position.x, self.width, self.cell_size),
            Self::wrap_axis(position.y, self.height, self.cell_size),
        )
    }

    fn wrap_axis(value: i32, bound: i32, cell_size: i32) -> i32 {
        if value >= bound {
            0
        } else if value < 0 {
            bound - cell_size
        } else {
            value
        }
    }
}

impl Validate for WorldSettings {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size <= 0 {
            return Err(format!("Cell size must be positive, got {}", self.cell_size));
        }
        if self.width <= 0 || self.height <= 0 {
            return Err(format!(
                "World dimensions must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if self.width % self.cell_size != 0 || self.height % self.cell_size != 0 {
            return Err(format!(
                "World dimensions {}x{} must be multiples of the cell size {}",
                self.width, self.height, self.cell_size
            ));
        }
        if !self.move_interval.is_finite() || self.move_interval <= 0.0 {
            return Err(format!(
                "Move interval must be a positive number of seconds, got {}",
                self.move_interval
            ));
        }
        Ok(())
    }
}
