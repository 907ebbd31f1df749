pub const CONFIG_FILE_NAME: &str = "snake_desktop_config.yaml";
pub const WINDOW_TITLE: &str = "Snake";
pub const GAME_OVER_MESSAGE: &str = "Game Over... tap <space> to restart!";
pub const FRAME_RATE_SAMPLES: usize = 60;
pub const HUD_FONT_SIZE: f32 = 18.0;
