mod config;
mod constants;
mod frame_rate;
mod input;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::SessionRng;
use common::config::Validate;
use common::logger::{self, LogLevel};
use common::log;
use common::snake::SnakeSimulation;
use eframe::egui;

use config::get_config_manager;
use constants::WINDOW_TITLE;
use ui::GameScreen;

#[derive(Parser)]
#[command(name = "snake_desktop")]
struct Args {
    /// Path to the YAML config; defaults to a file next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for apple placement, to replay a session.
    #[arg(long)]
    seed: Option<u64>,

    /// Draw the cell grid regardless of the config.
    #[arg(long)]
    show_grid: bool,

    /// Write the default config (if none exists) and exit.
    #[arg(long)]
    write_default_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Snake".to_string());
    let level = if args.debug { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, level);

    let config_manager = get_config_manager(args.config);
    if args.write_default_config {
        config_manager.get_or_init_config()?;
        log!("Config written to {}", config_manager.path().display());
        return Ok(());
    }

    let mut config = config_manager.get_config()?;
    if args.show_grid {
        config.display.show_grid = true;
    }
    config.validate()?;
    log!("Loaded config from {}", config_manager.path().display());

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let settings = config.world_settings();
    let window_size = [
        settings.width as f32 * config.display.window_scale,
        settings.height as f32 * config.display.window_scale,
    ];
    let simulation = SnakeSimulation::new(settings, rng)?;
    let screen = GameScreen::new(simulation, config.display.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(WINDOW_TITLE, options, Box::new(|_cc| Ok(Box::new(screen))))?;

    Ok(())
}
