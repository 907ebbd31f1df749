mod game_screen;
mod world_view;

pub use game_screen::GameScreen;
pub use world_view::WorldView;
