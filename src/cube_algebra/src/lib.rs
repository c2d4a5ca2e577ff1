//! The algebra underneath a 3x3x3 cube: permutations of pieces, corner twist and edge
//! flip vectors, and the action of the six face turns on them.

#![warn(clippy::pedantic)]

pub mod discrete_math;
pub mod face;
pub mod invariants;
pub mod orientation;
pub mod permutation;

pub use face::Face;
pub use invariants::{InvariantError, check_reachable, is_reachable};
pub use orientation::{CornerOrientation, Corners, EdgeOrientation, Edges, Orbit, Orientation};
pub use permutation::{Parity, Permutation, PermutationError};
