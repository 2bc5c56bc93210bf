use ggez::graphics::{Color, Rect};

use crate::{
    basic::{GridDim, Point},
    game::{GameState, Phase},
};

pub use palette::Palette;

mod palette;

/// Axis-aligned rectangle in the unit square, y grows upward
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct NormRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl NormRect {
    /// Banner in the middle of the window for the start
    /// prompt and the game over notice
    pub const OVERLAY: Self = Self {
        x: 0.3,
        y: 0.45,
        w: 0.4,
        h: 0.1,
    };

    /// The unit square with its lower-left corner at `(x, y) / size`
    pub fn cell(point: Point, grid: GridDim) -> Self {
        let side = 1. / grid.size as f32;
        Self {
            x: point.x as f32 * side,
            y: point.y as f32 * side,
            w: side,
            h: side,
        }
    }

    /// Stretch the unit square over a `width` x `height` pixel
    /// area whose origin is the top-left corner
    pub fn to_screen(self, width: f32, height: f32) -> Rect {
        Rect {
            x: self.x * width,
            y: (1. - self.y - self.h) * height,
            w: self.w * width,
            h: self.h * height,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Quad {
    pub rect: NormRect,
    pub color: Color,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Notice {
    pub text: &'static str,
    pub color: Color,
}

impl Notice {
    pub const START: &'static str = "Press SPACE to Start";
    pub const GAME_OVER: &'static str = "Game Over";
}

/// Everything to draw in one frame, back to front
#[derive(Clone, PartialEq, Debug)]
pub struct Scene {
    pub background: Color,
    pub quads: Vec<Quad>,
    pub notice: Option<Notice>,
}

#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct RenderConfig {
    /// Keep the snake and apple visible under the start
    /// and game over overlays instead of replacing them
    pub board_under_overlay: bool,
}

fn board_quads(state: &GameState, palette: &Palette, quads: &mut Vec<Quad>) {
    quads.extend(state.snake.iter().map(|&segment| Quad {
        rect: NormRect::cell(segment, state.grid),
        color: palette.snake,
    }));
    quads.push(Quad {
        rect: NormRect::cell(state.apple, state.grid),
        color: palette.apple,
    });
}

/// Project the game onto draw primitives, reads the state only
pub fn scene(state: &GameState, palette: &Palette, config: RenderConfig) -> Scene {
    let overlay = match state.phase {
        Phase::Playing => None,
        Phase::NotStarted => Some((palette.start_overlay, Notice::START)),
        Phase::GameOver => Some((palette.game_over_overlay, Notice::GAME_OVER)),
    };

    let mut quads = Vec::with_capacity(state.len() + 2);
    if overlay.is_none() || config.board_under_overlay {
        board_quads(state, palette, &mut quads);
    }

    let notice = overlay.map(|(overlay_color, text)| {
        quads.push(Quad {
            rect: NormRect::OVERLAY,
            color: overlay_color,
        });
        Notice {
            text,
            color: palette.notice,
        }
    });

    Scene {
        background: palette.background,
        quads,
        notice,
    }
}
