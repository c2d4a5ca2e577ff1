use std::{fmt, str::FromStr};
use thiserror::Error;

/// One of the six faces of the cube. Turning a face means a clockwise quarter turn as
/// seen when looking directly at that face.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Face {
    U,
    D,
    L,
    R,
    F,
    B,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown face {0:?}, expected one of U, D, L, R, F or B")]
pub struct ParseFaceError(pub String);

impl Face {
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::L, Face::R, Face::F, Face::B];

    /// The position of the face in [`Face::ALL`], used to index per-face tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Face::U => "U",
            Face::D => "D",
            Face::L => "L",
            Face::R => "R",
            Face::F => "F",
            Face::B => "B",
        }
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::R => Face::L,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Face {
    type Err = ParseFaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Face::ALL
            .into_iter()
            .find(|face| face.name() == s)
            .ok_or_else(|| ParseFaceError(s.to_owned()))
    }
}
