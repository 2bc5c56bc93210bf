#[macro_use]
extern crate derive_more;

use clap::Parser;
use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::run;
use ggez::ContextBuilder;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::app::App;
use crate::config::{Args, Config};
use crate::error::{Error, ErrorConversion, Result};

mod app;
mod basic;
mod config;
mod error;
mod game;
mod rendering;

/// Status for a failure before the game could start
const INIT_FAILURE: i32 = -1;

fn init_logger(level: LevelFilter) {
    // keep ggez and the graphics backend quiet unless asked for
    let log_config = ConfigBuilder::new()
        .add_filter_allow_str(env!("CARGO_CRATE_NAME"))
        .build();
    if let Err(e) = TermLogger::init(level, log_config, TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("warning: logger unavailable: {}", e);
    }
}

fn context_builder(config: &Config) -> ContextBuilder {
    let wm = WindowMode::default()
        .dimensions(config.window_width as f32, config.window_height as f32)
        .resizable(false);
    let ws = WindowSetup::default().title("Snake Game").vsync(true);

    ContextBuilder::new("grid_snake", "gorilskij")
        .window_mode(wm)
        .window_setup(ws)
}

fn main() {
    let args = Args::parse();
    init_logger(args.log_level());

    let config = match Config::from_args(args).with_trace_step("main") {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(INIT_FAILURE);
        }
    };
    info!(
        "{}x{} grid, {}x{} window, tick {}ms",
        config.grid.size,
        config.grid.size,
        config.window_width,
        config.window_height,
        config.tick.as_millis(),
    );

    let built: Result<_> = context_builder(&config)
        .build()
        .map_err(Error::from)
        .with_trace_step("ContextBuilder::build");
    let (ctx, event_loop) = match built {
        Ok(pair) => pair,
        Err(e) => {
            error!("Failed to create window: {}", e);
            std::process::exit(INIT_FAILURE);
        }
    };

    run(ctx, event_loop, App::new(&config))
}
