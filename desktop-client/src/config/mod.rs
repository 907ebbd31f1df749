mod display_config;
mod gameplay_config;
mod main_config;
mod world_config;

pub use display_config::DisplayConfig;
pub use gameplay_config::GameplayConfig;
pub use main_config::{get_config_manager, Config};
pub use world_config::WorldConfig;
