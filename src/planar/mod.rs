//! Planar geometry: 2D vectors and their polar decomposition.

mod angle;
mod quadrant;
mod vector;

pub use angle::Angle;
pub use quadrant::Quadrant;
pub use vector::{Notation, Vector2};
