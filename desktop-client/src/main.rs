mod config;
mod input;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::games::snake::ExitReason;
use common::{log, logger};

use config::{get_config_manager, Config};
use ui::{RunResult, SnakeApp};

#[derive(Parser)]
#[command(name = "block_snake")]
struct Args {
    /// Config file to use instead of the one next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for apple, block and respawn placement.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Also log per-tick details.
    #[arg(long)]
    verbose: bool,

    /// Write the default config to the config path and exit.
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(args.config.as_deref());

    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        log!("Default config written to {}", config_manager.path().display());
        return Ok(());
    }

    let config = config_manager.get_config()?;
    log!("Using config {}", config_manager.path().display());

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let result = RunResult::new();
    let app = SnakeApp::new(&config.snake, rng, result.clone())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.snake.board_width as f32, config.snake.board_height as f32])
            .with_resizable(false)
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Block Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )?;

    match result.take()? {
        ExitReason::Quit => {
            log!("Game closed");
            Ok(())
        }
        ExitReason::BlockCollision(at) => {
            log!("Game over: block at ({}, {})", at.x, at.y);
            Err("Snake collided with a block. Game over!".into())
        }
    }
}
