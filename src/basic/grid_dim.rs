use rand::Rng;

use super::Point;

/// Side length of the square board, in cells
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GridDim {
    pub size: i32,
}

impl GridDim {
    pub const fn new(size: i32) -> Self {
        Self { size }
    }

    /// Checks if between (0, 0) and (size, size)
    pub fn contains(self, point: Point) -> bool {
        (0..self.size).contains(&point.x) && (0..self.size).contains(&point.y)
    }

    /// Uniform over all `size²` cells, occupied ones included
    pub fn random_cell<R: Rng>(self, rng: &mut R) -> Point {
        Point {
            x: rng.gen_range(0..self.size),
            y: rng.gen_range(0..self.size),
        }
    }

    /// Where a fresh snake starts
    pub fn origin(self) -> Point {
        Point::new(self.size / 2, self.size / 2)
    }

    /// Where the first apple sits, never on `origin()` for `size >= 2`
    pub fn initial_apple(self) -> Point {
        let c = (self.size * 3 / 4).min(self.size - 1);
        let apple = Point::new(c, c);
        if apple == self.origin() {
            Point::new(0, 0)
        } else {
            apple
        }
    }

    pub fn cell_count(self) -> usize {
        (self.size * self.size) as usize
    }
}
