mod entity;
mod input;
mod simulation;
mod snapshot;
mod types;
mod world;

pub use input::{Clock, FixedClock, InputSource, PressedKeys, RandomSource, SystemClock};
pub use simulation::SnakeSimulation;
pub use entity::Snake;
pub use snapshot::SnakeSnapshot;
pub use types::{Direction, GameState, Key, Position};
pub use world::{ApplePlacement, WorldSettings};
