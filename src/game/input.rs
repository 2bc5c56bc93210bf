use log::{debug, info};

use super::{GameState, Phase};
use crate::basic::Dir;

/// Keys the game reacts to, independent of the windowing backend
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Space,
    Escape,
}

impl Key {
    pub fn dir(self) -> Option<Dir> {
        use Key::*;
        match self {
            Up | W => Some(Dir::Up),
            Down | S => Some(Dir::Down),
            Left | A => Some(Dir::Left),
            Right | D => Some(Dir::Right),
            Space | Escape => None,
        }
    }
}

/// Tells the loop whether to keep going
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Signal {
    Continue,
    Exit,
}

impl GameState {
    /// React to a single key press, keys that mean nothing
    /// in the current phase are ignored
    pub fn handle_key(&mut self, key: Key) -> Signal {
        match (self.phase, key) {
            (Phase::NotStarted, Key::Space) => {
                info!("Starting Game...");
                self.phase = Phase::Playing;
            }
            (Phase::GameOver, Key::Space) => self.restart(),
            (Phase::GameOver, Key::Escape) => return Signal::Exit,
            _ => (),
        }

        if let Some(dir) = key.dir() {
            self.turn(dir);
        }

        Signal::Continue
    }

    /// Only turns across the axis of travel are accepted, a turn back
    /// onto the axis has to wait until the next step has been taken.
    /// A pending turn can't be flipped to its opposite either
    fn turn(&mut self, dir: Dir) {
        if dir.is_perpendicular_to(self.heading) && dir != -self.dir {
            debug!("turning {:?}", dir);
            self.dir = dir;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        basic::{GridDim, Point},
        game::{StartMode, StepOutcome},
    };
    use rand::{rngs::StdRng, SeedableRng};

    fn state(start_mode: StartMode) -> GameState {
        GameState::new(GridDim::new(20), start_mode)
    }

    #[test]
    fn space_starts_the_game() {
        let mut state = state(StartMode::StartScreen);
        assert_eq!(state.handle_key(Key::Escape), Signal::Continue);
        assert_eq!(state.phase, Phase::NotStarted);

        assert_eq!(state.handle_key(Key::Space), Signal::Continue);
        assert_eq!(state.phase, Phase::Playing);

        // no effect while playing
        assert_eq!(state.handle_key(Key::Space), Signal::Continue);
        assert_eq!(state.handle_key(Key::Escape), Signal::Continue);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn no_reversal() {
        let mut state = state(StartMode::AutoStart);
        assert_eq!(state.dir, Dir::Right);

        state.handle_key(Key::Left);
        assert_eq!(state.dir, Dir::Right);
        state.handle_key(Key::A);
        assert_eq!(state.dir, Dir::Right);

        state.handle_key(Key::Up);
        assert_eq!(state.dir, Dir::Up);
        state.handle_key(Key::S);
        assert_eq!(state.dir, Dir::Up);
    }

    #[test]
    fn pending_turn_is_not_flipped() {
        let mut state = state(StartMode::AutoStart);
        state.heading = Dir::Up;
        state.dir = Dir::Up;

        state.handle_key(Key::Right);
        assert_eq!(state.dir, Dir::Right);
        state.handle_key(Key::Left);
        assert_eq!(state.dir, Dir::Right);

        state.dir = Dir::Right;
        state.handle_key(Key::A);
        assert_eq!(state.dir, Dir::Right);
    }

    #[test]
    fn wasd_matches_arrows() {
        for (arrow, letter) in [
            (Key::Up, Key::W),
            (Key::Down, Key::S),
            (Key::Left, Key::A),
            (Key::Right, Key::D),
        ] {
            assert_eq!(arrow.dir(), letter.dir());
            assert!(arrow.dir().is_some());
        }
        assert_eq!(Key::Space.dir(), None);
        assert_eq!(Key::Escape.dir(), None);
    }

    #[test]
    fn last_turn_before_step_wins() {
        let mut state = state(StartMode::AutoStart);
        state.snake = [Point::new(10, 10), Point::new(9, 10), Point::new(8, 10)].into();
        let mut rng = StdRng::seed_from_u64(1);

        // up then left within one tick, left is still a reversal
        state.handle_key(Key::Up);
        state.handle_key(Key::Left);
        assert_eq!(state.dir, Dir::Up);

        assert_eq!(state.step(&mut rng), StepOutcome::Moved);
        assert_eq!(state.head(), Point::new(10, 11));

        // now travelling up, left is allowed
        state.handle_key(Key::Left);
        assert_eq!(state.step(&mut rng), StepOutcome::Moved);
        assert_eq!(state.head(), Point::new(9, 11));
    }

    #[test]
    fn directions_register_in_every_phase() {
        let mut state = state(StartMode::StartScreen);
        state.handle_key(Key::Down);
        assert_eq!(state.dir, Dir::Down);

        state.phase = Phase::GameOver;
        state.heading = Dir::Down;
        state.handle_key(Key::Left);
        assert_eq!(state.dir, Dir::Left);
    }

    #[test]
    fn restart_from_game_over() {
        for (start_mode, expected) in [
            (StartMode::StartScreen, Phase::NotStarted),
            (StartMode::AutoStart, Phase::Playing),
        ] {
            let mut state = state(start_mode);
            state.phase = Phase::Playing;
            state.snake = [Point::new(19, 3), Point::new(18, 3)].into();
            state.apple = Point::new(2, 2);
            state.dir = Dir::Up;
            state.heading = Dir::Up;
            state.phase = Phase::GameOver;

            assert_eq!(state.handle_key(Key::Space), Signal::Continue);
            assert_eq!(state.snake, [Point::new(10, 10)]);
            assert_eq!(state.apple, Point::new(15, 15));
            assert_eq!(state.dir, Dir::Right);
            assert_eq!(state.phase, expected);
        }
    }

    #[test]
    fn escape_exits_only_after_game_over() {
        let mut state = state(StartMode::AutoStart);
        assert_eq!(state.handle_key(Key::Escape), Signal::Continue);

        state.phase = Phase::GameOver;
        assert_eq!(state.handle_key(Key::Escape), Signal::Exit);
        // exiting is the loop's job
        assert_eq!(state.phase, Phase::GameOver);
    }
}
