pub use dir::Dir;
pub use grid_dim::GridDim;
pub use point::Point;

mod dir;
mod grid_dim;
mod point;
