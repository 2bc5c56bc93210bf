use std::fmt::{Debug, Error, Formatter};

/// A cell on the square grid, (0, 0) is the bottom-left corner
#[derive(Eq, PartialEq, Copy, Clone, Hash, Add, Sub)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Debug for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Orthogonal neighbors share an edge
    pub fn is_adjacent_to(self, other: Self) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

#[test]
fn test_point_add() {
    let p = Point::new(3, 4) + Point::new(-1, 2);
    assert_eq!(p, Point::new(2, 6));
    assert_eq!(p - Point::new(2, 6), Point::new(0, 0));
}

#[test]
fn test_adjacency() {
    let p = Point::new(5, 5);
    assert!(p.is_adjacent_to(Point::new(5, 6)));
    assert!(p.is_adjacent_to(Point::new(4, 5)));
    assert!(!p.is_adjacent_to(Point::new(6, 6)));
    assert!(!p.is_adjacent_to(p));
}
