use itertools::Itertools;
use log::{debug, info, trace};
use rand::Rng;

use super::{GameState, Phase};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Collision {
    Wall,
    Body,
}

/// What a single tick did to the game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum StepOutcome {
    /// Not playing, nothing moved
    Idle,
    Moved,
    Ate,
    /// The game is over, the snake was left untouched
    Crashed(Collision),
}

impl GameState {
    /// Advance the snake by one cell, only while playing
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> StepOutcome {
        if self.phase != Phase::Playing {
            return StepOutcome::Idle;
        }

        let new_head = self.head() + self.dir.delta();

        // checked against the body before the move, the tail
        // still counts even though it would move out of the way
        let collision = if !self.grid.contains(new_head) {
            Some(Collision::Wall)
        } else if self.snake.contains(&new_head) {
            Some(Collision::Body)
        } else {
            None
        };

        if let Some(collision) = collision {
            self.phase = Phase::GameOver;
            info!(
                "Game Over ({:?} at {:?}, length {})",
                collision,
                new_head,
                self.len(),
            );
            return StepOutcome::Crashed(collision);
        }

        self.snake.push_front(new_head);
        self.heading = self.dir;
        debug_assert!(self.snake.iter().all_unique());
        debug_assert!(new_head.is_adjacent_to(self.snake[1]));
        debug_assert!(self.len() <= self.grid.cell_count());

        if new_head == self.apple {
            // may land under the snake
            self.apple = self.grid.random_cell(rng);
            debug!("apple eaten, length {}, next apple at {:?}", self.len(), self.apple);
            StepOutcome::Ate
        } else {
            self.snake.pop_back();
            trace!("head at {:?}", new_head);
            StepOutcome::Moved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        basic::{Dir, GridDim, Point},
        game::StartMode,
    };
    use itertools::Itertools;
    use rand::{rngs::StdRng, SeedableRng};

    fn playing(size: i32) -> GameState {
        GameState::new(GridDim::new(size), StartMode::AutoStart)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn assert_connected(state: &GameState) {
        assert!(state.snake.iter().all_unique(), "overlap: {:?}", state.snake);
        for (a, b) in state.snake.iter().tuple_windows() {
            assert!(a.is_adjacent_to(*b), "{:?} and {:?} not adjacent", a, b);
        }
    }

    #[test]
    fn moves_one_cell_right() {
        let mut state = playing(20);
        let mut rng = rng();

        assert_eq!(state.step(&mut rng), StepOutcome::Moved);
        assert_eq!(state.snake, [Point::new(11, 10)]);
        assert_eq!(state.apple, Point::new(15, 15));
        assert_eq!(state.phase, Phase::Playing);

        for _ in 0..5 {
            assert_eq!(state.step(&mut rng), StepOutcome::Moved);
            assert_eq!(state.len(), 1);
        }
        assert_eq!(state.head(), Point::new(16, 10));
    }

    #[test]
    fn idle_unless_playing() {
        let mut state = GameState::new(GridDim::new(20), StartMode::StartScreen);
        assert_eq!(state.step(&mut rng()), StepOutcome::Idle);
        assert_eq!(state.snake, [Point::new(10, 10)]);

        state.phase = Phase::GameOver;
        assert_eq!(state.step(&mut rng()), StepOutcome::Idle);
        assert_eq!(state.snake, [Point::new(10, 10)]);
    }

    #[test]
    fn wall_ends_game_and_keeps_snake() {
        let mut state = playing(20);
        state.snake = [Point::new(19, 10)].into();

        assert_eq!(state.step(&mut rng()), StepOutcome::Crashed(Collision::Wall));
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.snake, [Point::new(19, 10)]);

        // frozen until restart
        assert_eq!(state.step(&mut rng()), StepOutcome::Idle);
        assert_eq!(state.snake, [Point::new(19, 10)]);
    }

    #[test]
    fn every_wall_is_solid() {
        for (start, dir) in [
            (Point::new(0, 5), Dir::Left),
            (Point::new(9, 5), Dir::Right),
            (Point::new(5, 0), Dir::Down),
            (Point::new(5, 9), Dir::Up),
        ] {
            let mut state = playing(10);
            state.snake = [start].into();
            state.dir = dir;
            assert_eq!(
                state.step(&mut rng()),
                StepOutcome::Crashed(Collision::Wall),
                "{:?} going {:?}",
                start,
                dir,
            );
            assert_eq!(state.head(), start);
        }
    }

    #[test]
    fn head_stays_on_board_while_playing() {
        let mut state = playing(8);
        let mut rng = rng();
        while state.step(&mut rng) != StepOutcome::Crashed(Collision::Wall) {
            assert!(state.grid.contains(state.head()));
        }
        assert_eq!(state.head(), Point::new(7, 4));
    }

    #[test]
    fn eating_grows_by_one() {
        let mut state = playing(20);
        state.apple = Point::new(11, 10);
        let mut rng = rng();

        assert_eq!(state.step(&mut rng), StepOutcome::Ate);
        assert_eq!(state.snake, [Point::new(11, 10), Point::new(10, 10)]);
        assert!(state.grid.contains(state.apple));

        // the apple may respawn anywhere, keep it out of the way
        state.apple = Point::new(0, 0);
        assert_eq!(state.step(&mut rng), StepOutcome::Moved);
        assert_eq!(state.snake, [Point::new(12, 10), Point::new(11, 10)]);
        assert_connected(&state);
    }

    #[test]
    fn length_constant_without_apples() {
        let mut state = playing(20);
        state.snake = (5..10).rev().map(|x| Point::new(x, 10)).collect();
        state.apple = Point::new(0, 0);
        let mut rng = rng();

        for dir in [Dir::Right, Dir::Up, Dir::Up, Dir::Left, Dir::Left, Dir::Up] {
            state.dir = dir;
            assert_eq!(state.step(&mut rng), StepOutcome::Moved);
            assert_eq!(state.len(), 5);
            assert_connected(&state);
        }
    }

    #[test]
    fn running_into_body_ends_game() {
        let mut state = playing(20);
        // hook shape, head at (10, 10) heading down into (10, 9)
        state.snake = [
            Point::new(10, 10),
            Point::new(11, 10),
            Point::new(11, 9),
            Point::new(10, 9),
            Point::new(9, 9),
        ]
        .into();
        state.dir = Dir::Down;
        let before = state.snake.clone();

        assert_eq!(state.step(&mut rng()), StepOutcome::Crashed(Collision::Body));
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.snake, before);
    }

    #[test]
    fn tail_cell_counts_as_body() {
        let mut state = playing(20);
        // a 2x2 loop, the head would enter the cell the tail is leaving
        state.snake = [
            Point::new(10, 10),
            Point::new(11, 10),
            Point::new(11, 11),
            Point::new(10, 11),
        ]
        .into();
        state.dir = Dir::Up;

        assert_eq!(state.step(&mut rng()), StepOutcome::Crashed(Collision::Body));
    }

    #[test]
    fn apple_respawn_is_reproducible() {
        let mut a = playing(20);
        let mut b = playing(20);
        a.apple = Point::new(11, 10);
        b.apple = Point::new(11, 10);

        a.step(&mut StdRng::seed_from_u64(3));
        b.step(&mut StdRng::seed_from_u64(3));
        assert_eq!(a.apple, b.apple);
    }
}
