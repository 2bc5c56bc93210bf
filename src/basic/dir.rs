use std::ops::Neg;

use super::Point;
use Dir::*;

// y grows upward, Up moves toward the top of the window
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Axis {
    Horizontal, // -
    Vertical,   // |
}

impl Dir {
    /// Unit vector of one step in this direction
    pub fn delta(self) -> Point {
        match self {
            Up => Point { x: 0, y: 1 },
            Down => Point { x: 0, y: -1 },
            Left => Point { x: -1, y: 0 },
            Right => Point { x: 1, y: 0 },
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Up | Down => Axis::Vertical,
            Left | Right => Axis::Horizontal,
        }
    }

    pub fn is_perpendicular_to(self, other: Self) -> bool {
        self.axis() != other.axis()
    }
}

#[test]
fn test_dir_neg() {
    for dir in [Up, Down, Left, Right] {
        assert_eq!(-(-dir), dir);
        assert_eq!(dir.delta() + (-dir).delta(), Point { x: 0, y: 0 });
        assert_eq!(dir.axis(), (-dir).axis());
    }
}

#[test]
fn test_perpendicular() {
    for (a, b, expect) in [
        (Right, Up, true),
        (Right, Down, true),
        (Right, Left, false),
        (Right, Right, false),
        (Up, Left, true),
        (Up, Down, false),
    ] {
        assert_eq!(a.is_perpendicular_to(b), expect, "{:?} / {:?}", a, b);
    }
}
