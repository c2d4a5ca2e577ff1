//! Corner twist and edge flip vectors and the action of face turns on them.

use crate::{face::Face, permutation::Permutation};
use itertools::Itertools;
use std::{fmt, fmt::Debug, hash::Hash, marker::PhantomData};
use thiserror::Error;

/// The effect of one face turn on an orbit. Entry `i` is `(source, increment)`: the
/// piece in slot `source` moves into slot `i` and its orientation increases by
/// `increment`. Slots are 0-indexed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Transformation<const N: usize>([(u8, u8); N]);

impl<const N: usize> Transformation<N> {
    #[must_use]
    pub const fn get(&self) -> &[(u8, u8); N] {
        &self.0
    }
}

/// A set of cube pieces that face turns move among themselves, such as the corners.
pub trait Orbit<const N: usize>: Copy + Debug + PartialEq + Eq + Hash {
    /// The number of distinct orientations of a piece.
    const MODULUS: u8;
    /// Slot labels in slot order.
    const SLOT_NAMES: [&'static str; N];
    /// One transformation per face, in [`Face::ALL`] order.
    const TRANSFORMATIONS: [Transformation<N>; 6];

    #[must_use]
    fn transformation(face: Face) -> Transformation<N> {
        Self::TRANSFORMATIONS[face.index()]
    }

    /// Where a face turn moves each slot's piece, as a permutation of slots.
    #[must_use]
    fn position_permutation(face: Face) -> Permutation<N> {
        let mut mapping = [0; N];
        for (destination, &(source, _)) in Self::transformation(face).get().iter().enumerate() {
            mapping[usize::from(source)] = destination;
        }
        Permutation::from_mapping(mapping)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Corners;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Edges;

#[rustfmt::skip]
impl Orbit<8> for Corners {
    const MODULUS: u8 = 3;
    const SLOT_NAMES: [&'static str; 8] = ["ufl", "urf", "ubr", "ulb", "dbl", "dlf", "dfr", "drb"];
    const TRANSFORMATIONS: [Transformation<8>; 6] = [
        // U
        Transformation([(1, 0), (2, 0), (3, 0), (0, 0), (4, 0), (5, 0), (6, 0), (7, 0)]),
        // D
        Transformation([(0, 0), (1, 0), (2, 0), (3, 0), (7, 0), (4, 0), (5, 0), (6, 0)]),
        // L
        Transformation([(3, 2), (1, 0), (2, 0), (4, 1), (5, 2), (0, 1), (6, 0), (7, 0)]),
        // R
        Transformation([(0, 0), (6, 1), (1, 2), (3, 0), (4, 0), (5, 0), (7, 2), (2, 1)]),
        // F
        Transformation([(5, 1), (0, 2), (2, 0), (3, 0), (4, 0), (6, 2), (1, 1), (7, 0)]),
        // B
        Transformation([(0, 0), (1, 0), (7, 1), (2, 2), (3, 1), (5, 0), (6, 0), (4, 2)]),
    ];
}

// Flips are only induced by F and B in this convention
#[rustfmt::skip]
impl Orbit<12> for Edges {
    const MODULUS: u8 = 2;
    const SLOT_NAMES: [&'static str; 12] = [
        "ub", "ur", "uf", "ul", "lb", "rb", "rf", "lf", "db", "dr", "df", "dl",
    ];
    const TRANSFORMATIONS: [Transformation<12>; 6] = [
        // U
        Transformation([(3, 0), (0, 0), (1, 0), (2, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0)]),
        // D
        Transformation([(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (9, 0), (10, 0), (11, 0), (8, 0)]),
        // L
        Transformation([(0, 0), (1, 0), (2, 0), (4, 0), (11, 0), (5, 0), (6, 0), (3, 0), (8, 0), (9, 0), (10, 0), (7, 0)]),
        // R
        Transformation([(0, 0), (6, 0), (2, 0), (3, 0), (4, 0), (1, 0), (9, 0), (7, 0), (8, 0), (5, 0), (10, 0), (11, 0)]),
        // F
        Transformation([(0, 0), (1, 0), (7, 1), (3, 0), (4, 0), (5, 0), (2, 1), (10, 1), (8, 0), (9, 0), (6, 1), (11, 0)]),
        // B
        Transformation([(5, 1), (1, 0), (2, 0), (3, 0), (0, 1), (8, 1), (6, 0), (7, 0), (4, 1), (9, 0), (10, 0), (11, 0)]),
    ];
}

/// An orientation vector over `ℤ/MODULUS`, one entry per slot of the orbit `O`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Orientation<O: Orbit<N>, const N: usize> {
    values: [u8; N],
    orbit: PhantomData<O>,
}

/// The twist of each corner, in `ℤ/3`.
pub type CornerOrientation = Orientation<Corners, 8>;

/// The flip of each edge, in `ℤ/2`.
pub type EdgeOrientation = Orientation<Edges, 12>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrientationError {
    #[error("Orientation of slot {slot} out of range, expected a value below {modulus} but got {value}")]
    ValueOutOfRange { slot: usize, value: u8, modulus: u8 },
}

impl<O: Orbit<N>, const N: usize> Orientation<O, N> {
    /// The solved orientation.
    #[must_use]
    pub const fn zero() -> Self {
        Orientation {
            values: [0; N],
            orbit: PhantomData,
        }
    }

    /// # Errors
    ///
    /// Returns [`OrientationError::ValueOutOfRange`] if any value is not below the
    /// orbit's modulus.
    pub fn new(values: [u8; N]) -> Result<Self, OrientationError> {
        if let Some((slot, &value)) = values
            .iter()
            .find_position(|&&value| value >= O::MODULUS)
        {
            return Err(OrientationError::ValueOutOfRange {
                slot: slot + 1,
                value,
                modulus: O::MODULUS,
            });
        }

        Ok(Orientation {
            values,
            orbit: PhantomData,
        })
    }

    #[must_use]
    pub const fn values(&self) -> &[u8; N] {
        &self.values
    }

    /// The orientation in a 1-indexed slot.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<u8> {
        slot.checked_sub(1)
            .and_then(|index| self.values.get(index))
            .copied()
    }

    /// Apply a clockwise quarter turn of `face`.
    #[must_use]
    pub fn turn(&self, face: Face) -> Self {
        let transformation = O::transformation(face);

        Orientation {
            values: std::array::from_fn(|i| {
                let (source, increment) = transformation.get()[i];
                (self.values[usize::from(source)] + increment) % O::MODULUS
            }),
            orbit: PhantomData,
        }
    }

    /// Apply a counter-clockwise quarter turn of `face`, undoing [`Self::turn`].
    #[must_use]
    pub fn turn_inverse(&self, face: Face) -> Self {
        let mut values = [0; N];

        for (destination, &(source, increment)) in
            O::transformation(face).get().iter().enumerate()
        {
            values[usize::from(source)] =
                (self.values[destination] + O::MODULUS - increment) % O::MODULUS;
        }

        Orientation {
            values,
            orbit: PhantomData,
        }
    }

    #[must_use]
    pub fn u(&self) -> Self {
        self.turn(Face::U)
    }

    #[must_use]
    pub fn d(&self) -> Self {
        self.turn(Face::D)
    }

    #[must_use]
    pub fn l(&self) -> Self {
        self.turn(Face::L)
    }

    #[must_use]
    pub fn r(&self) -> Self {
        self.turn(Face::R)
    }

    #[must_use]
    pub fn f(&self) -> Self {
        self.turn(Face::F)
    }

    #[must_use]
    pub fn b(&self) -> Self {
        self.turn(Face::B)
    }

    /// The sum of all orientations modulo the orbit's modulus. Face turns preserve it,
    /// so any state reachable from solved has a residue of zero.
    #[must_use]
    pub fn residue(&self) -> u8 {
        self.values
            .iter()
            .fold(0, |sum, &value| (sum + value) % O::MODULUS)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&value| value == 0)
    }
}

impl<O: Orbit<N>, const N: usize> Default for Orientation<O, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<O: Orbit<N>, const N: usize> TryFrom<[u8; N]> for Orientation<O, N> {
    type Error = OrientationError;

    fn try_from(values: [u8; N]) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl<O: Orbit<N>, const N: usize> fmt::Display for Orientation<O, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            O::SLOT_NAMES
                .iter()
                .zip(self.values)
                .map(|(name, value)| format!("{name}:{value}"))
                .join(" ")
        )
    }
}
