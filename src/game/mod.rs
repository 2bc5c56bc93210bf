use std::collections::VecDeque;

use log::info;

use crate::basic::{Dir, GridDim, Point};

pub use input::{Key, Signal};
pub use step::StepOutcome;

mod input;
mod step;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Phase {
    NotStarted,
    Playing,
    GameOver,
}

/// Whether the game waits on a start screen or starts
/// moving as soon as it is (re)initialized
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum StartMode {
    StartScreen,
    AutoStart,
}

impl StartMode {
    fn initial_phase(self) -> Phase {
        match self {
            StartMode::StartScreen => Phase::NotStarted,
            StartMode::AutoStart => Phase::Playing,
        }
    }
}

/// Everything that changes while playing, owned by the app and
/// handed by reference to the simulation, input and rendering
pub struct GameState {
    pub grid: GridDim,
    pub start_mode: StartMode,

    /// Head first, never empty
    pub snake: VecDeque<Point>,
    pub apple: Point,

    /// Requested direction, applied by the next step
    pub dir: Dir,
    /// Direction of the last executed step, the axis of travel
    pub heading: Dir,

    pub phase: Phase,
}

impl GameState {
    pub const START_DIR: Dir = Dir::Right;

    pub fn new(grid: GridDim, start_mode: StartMode) -> Self {
        let mut state = Self {
            grid,
            start_mode,
            snake: VecDeque::new(),
            apple: grid.initial_apple(),
            dir: Self::START_DIR,
            heading: Self::START_DIR,
            phase: start_mode.initial_phase(),
        };
        state.restart();
        state
    }

    /// Put the snake, apple and direction back where they started
    pub fn restart(&mut self) {
        self.snake.clear();
        self.snake.push_back(self.grid.origin());
        self.apple = self.grid.initial_apple();
        self.dir = Self::START_DIR;
        self.heading = Self::START_DIR;
        self.phase = self.start_mode.initial_phase();

        match self.phase {
            Phase::NotStarted => info!("Press SPACE to Start"),
            _ => info!("Starting Game..."),
        }
    }

    pub fn head(&self) -> Point {
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }
}
