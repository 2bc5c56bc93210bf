use std::fmt::{self, Display, Formatter};
use std::result;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::{ArgAction, Parser};
use log::LevelFilter;
use static_assertions::const_assert;

use crate::{
    basic::GridDim,
    error::Result,
    game::StartMode,
    rendering::RenderConfig,
};

pub const DEFAULT_GRID_SIZE: i32 = 20;
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
pub const DEFAULT_TICK_MS: u64 = 100;

/// Smallest board with room for the snake and an apple
pub const MIN_GRID_SIZE: i32 = 2;
pub const MAX_GRID_SIZE: i32 = 1000;

const_assert!(DEFAULT_GRID_SIZE >= MIN_GRID_SIZE);

/// Classic snake on a square grid
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of cells along each side of the board
    #[arg(
        long,
        value_name = "CELLS",
        default_value_t = DEFAULT_GRID_SIZE,
        value_parser = clap::value_parser!(i32).range(MIN_GRID_SIZE as i64..=MAX_GRID_SIZE as i64)
    )]
    pub grid_size: i32,
    /// Window width in pixels
    #[arg(
        long,
        value_name = "PIXELS",
        default_value_t = DEFAULT_WINDOW_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub width: u32,
    /// Window height in pixels
    #[arg(
        long,
        value_name = "PIXELS",
        default_value_t = DEFAULT_WINDOW_HEIGHT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub height: u32,
    /// Milliseconds between two moves of the snake
    #[arg(
        long = "tick-ms",
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..=10_000)
    )]
    pub tick_ms: u64,
    /// Start moving right away instead of waiting on the start screen
    #[arg(long)]
    pub auto_start: bool,
    /// Keep the board visible under the start and game over banners
    #[arg(long)]
    pub board_under_overlay: bool,
    /// Seed for apple placement, defaults to the current time
    #[arg(long)]
    pub seed: Option<u64>,
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// A setting outside of what the game can run with
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// Rejected by the command line parser
    Args(String),
    GridSize(i32),
    WindowSize { width: u32, height: u32 },
    Tick(Duration),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Args(message) => write!(f, "{}", message),
            ConfigError::GridSize(size) => write!(
                f,
                "grid size must be between {} and {}, got {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE, size
            ),
            ConfigError::WindowSize { width, height } => {
                write!(f, "window must not be empty, got {}x{}", width, height)
            }
            ConfigError::Tick(tick) => write!(f, "tick interval must be positive, got {:?}", tick),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub grid: GridDim,
    pub window_width: u32,
    pub window_height: u32,
    pub tick: Duration,
    pub start_mode: StartMode,
    pub render: RenderConfig,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridDim::new(DEFAULT_GRID_SIZE),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            start_mode: StartMode::StartScreen,
            render: RenderConfig::default(),
            seed: clock_seed(),
        }
    }
}

/// Seconds since the epoch, 0 if the clock is before it
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl Args {
    /// Needed before the rest is validated so errors can be logged
    pub fn log_level(&self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => LevelFilter::Warn,
            (false, 0) => LevelFilter::Info,
            (false, 1) => LevelFilter::Debug,
            (false, _) => LevelFilter::Trace,
        }
    }
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let config = Self {
            grid: GridDim::new(args.grid_size),
            window_width: args.width,
            window_height: args.height,
            tick: Duration::from_millis(args.tick_ms),
            start_mode: if args.auto_start {
                StartMode::AutoStart
            } else {
                StartMode::StartScreen
            },
            render: RenderConfig {
                board_under_overlay: args.board_under_overlay,
            },
            seed: args.seed.unwrap_or_else(clock_seed),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> result::Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid.size) {
            return Err(ConfigError::GridSize(self.grid.size));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::WindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if self.tick.is_zero() {
            return Err(ConfigError::Tick(self.tick));
        }
        Ok(())
    }
}
