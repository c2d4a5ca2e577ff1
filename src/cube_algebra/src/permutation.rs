//! Elements of the symmetric group on `N` points.
//!
//! Points are 1-indexed at every public boundary (cycle notation, [`Permutation::of`],
//! [`Permutation::images`]) and 0-indexed internally. Composition reads right to left
//! like function composition: `(a * b).of(x) == a.of(b.of(x))`.

use crate::discrete_math::checked_lcm_iter;
use itertools::Itertools;
use log::trace;
use pest::{Parser, error::LineColLocation};
use std::{fmt, ops::Mul, str::FromStr};
use thiserror::Error;

mod notation {
    //! Private module so the generated `Rule` enum stays out of the public API.

    use pest_derive::Parser;

    #[derive(Parser)]
    #[grammar = "cycle_notation.pest"]
    pub(super) struct CycleNotationParser;
}

use notation::{CycleNotationParser, Rule};

/// A permutation of the points `1..=N`.
///
/// The size is part of the type, so composing or comparing permutations of different
/// sizes does not compile.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Permutation<const N: usize> {
    // `mapping[i]` is the 0-based image of the 0-based point `i`
    mapping: [usize; N],
}

/// Whether a permutation is a product of an even or odd number of transpositions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Parity {
    Even,
    Odd,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CycleParseError {
    #[error("Malformed cycle notation at column {column}: {message}")]
    Syntax { column: usize, message: String },
    #[error("Point {point} is out of range, expected a value between 1 and {size}")]
    PointOutOfRange { point: String, size: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    #[error("Invalid cycle notation: {0}")]
    Parse(#[from] CycleParseError),
    #[error("Size mismatch, expected {expected} points but got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("Point {point} is out of range, expected a value between 1 and {size}")]
    OutOfRange { point: usize, size: usize },
    #[error("Not a bijection, {image} is the image of more than one point")]
    NotABijection { image: usize },
}

impl CycleParseError {
    fn from_pest(error: &pest::error::Error<Rule>) -> Self {
        let column = match error.line_col {
            LineColLocation::Pos((_, column)) | LineColLocation::Span((_, column), _) => column,
        };

        CycleParseError::Syntax {
            column,
            message: error.variant.message().into_owned(),
        }
    }
}

impl<const N: usize> Permutation<N> {
    /// The permutation that maps every point to itself.
    #[must_use]
    pub const fn identity() -> Self {
        let mut mapping = [0; N];
        let mut i = 0;
        while i < N {
            mapping[i] = i;
            i += 1;
        }
        Permutation { mapping }
    }

    /// Build a permutation from a 0-based mapping that is already known to be a
    /// bijection.
    pub(crate) fn from_mapping(mapping: [usize; N]) -> Self {
        debug_assert!(mapping.iter().all(|&image| image < N));
        debug_assert!(mapping.iter().all_unique());
        Permutation { mapping }
    }

    /// Parse cycle notation such as `"(1 2 3)(4 5)"`.
    ///
    /// Every cycle `(a1 a2 … ak)` is read as the transpositions
    /// `(a1 a2)(a2 a3)…(ak-1 ak)`, and the whole sequence of transpositions is
    /// multiplied in textual order. Disjoint cycles therefore mean what they usually
    /// mean, and overlapping cycles compose like `*` does: `"(1 2)(2 3)"` is `(1 2 3)`.
    /// The empty string is the identity.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::Parse`] if the parentheses are unbalanced, a token is
    /// not a non-negative integer, or a point lies outside `1..=N`.
    pub fn from_cycles(spec: &str) -> Result<Self, PermutationError> {
        let pairs = CycleNotationParser::parse(Rule::cycles, spec)
            .map_err(|e| CycleParseError::from_pest(&e))?;

        let mut permutation = Self::identity();

        for cycle in pairs
            .flat_map(pest::iterators::Pair::into_inner)
            .filter(|pair| pair.as_rule() == Rule::cycle)
        {
            let points = cycle
                .into_inner()
                .map(|point| parse_point::<N>(point.as_str()))
                .collect::<Result<Vec<_>, _>>()?;

            // Right-multiplying by the transposition (i j) swaps the images of i and j
            for (i, j) in points.into_iter().tuple_windows() {
                permutation.mapping.swap(i, j);
            }
        }

        trace!("Parsed cycle notation {spec:?} as {permutation}");

        Ok(permutation)
    }

    /// Build a permutation from the 1-indexed images of `1..=N`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::SizeMismatch`] if `images` does not have exactly `N`
    /// entries, [`PermutationError::OutOfRange`] if an image lies outside `1..=N`, and
    /// [`PermutationError::NotABijection`] if an image repeats.
    pub fn try_from_images(images: &[usize]) -> Result<Self, PermutationError> {
        if images.len() != N {
            return Err(PermutationError::SizeMismatch {
                expected: N,
                actual: images.len(),
            });
        }

        let mut mapping = [0; N];
        let mut covered = [false; N];

        for (slot, &image) in mapping.iter_mut().zip(images) {
            let Some(index) = image.checked_sub(1).filter(|&index| index < N) else {
                return Err(PermutationError::OutOfRange {
                    point: image,
                    size: N,
                });
            };

            if std::mem::replace(&mut covered[index], true) {
                return Err(PermutationError::NotABijection { image });
            }

            *slot = index;
        }

        Ok(Permutation { mapping })
    }

    /// The image of `point`.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::OutOfRange`] unless `1 <= point <= N`.
    pub fn of(&self, point: usize) -> Result<usize, PermutationError> {
        point
            .checked_sub(1)
            .and_then(|index| self.mapping.get(index))
            .map(|&image| image + 1)
            .ok_or(PermutationError::OutOfRange { point, size: N })
    }

    /// The 1-indexed images of `1..=N`, in order.
    pub fn images(&self) -> impl Iterator<Item = usize> + '_ {
        self.mapping.iter().map(|&image| image + 1)
    }

    /// `self ∘ other`, the permutation that applies `other` first and then `self`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Permutation {
            mapping: std::array::from_fn(|i| self.mapping[other.mapping[i]]),
        }
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut mapping = [0; N];
        for (point, &image) in self.mapping.iter().enumerate() {
            mapping[image] = point;
        }
        Permutation { mapping }
    }

    /// Compose the permutation with itself `exponent` times. Negative exponents use the
    /// inverse, and an exponent of zero gives the identity.
    #[must_use]
    pub fn power(&self, exponent: i64) -> Self {
        let mut remaining = exponent.unsigned_abs();
        let mut base = if exponent < 0 { self.inverse() } else { *self };
        let mut result = Self::identity();

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.compose(&base);
            }
            base = base.compose(&base);
            remaining >>= 1;
        }

        result
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// The disjoint cycles of length at least two, each starting at its smallest point,
    /// sorted by that point. Points are 1-indexed.
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut covered = [false; N];
        let mut cycles = vec![];

        for start in 0..N {
            if covered[start] || self.mapping[start] == start {
                continue;
            }

            covered[start] = true;
            let mut cycle = vec![start + 1];
            let mut next = self.mapping[start];

            while next != start {
                covered[next] = true;
                cycle.push(next + 1);
                next = self.mapping[next];
            }

            cycles.push(cycle);
        }

        cycles
    }

    /// The sorted lengths of the non-trivial cycles.
    #[must_use]
    pub fn cycle_type(&self) -> Vec<usize> {
        self.cycles().iter().map(Vec::len).sorted_unstable().collect_vec()
    }

    /// The smallest positive `k` such that `self.power(k)` is the identity.
    ///
    /// # Panics
    ///
    /// Panics if the order does not fit in a `u64`, which takes `N` in the hundreds.
    /// Use [`Self::checked_order`] for permutations that large.
    #[must_use]
    pub fn order(&self) -> u64 {
        match self.checked_order() {
            Some(order) => order,
            None => panic!("The order of {self} does not fit in a u64"),
        }
    }

    /// The order as the LCM of the cycle lengths, or `None` if it overflows a `u64`.
    #[must_use]
    pub fn checked_order(&self) -> Option<u64> {
        checked_lcm_iter(self.cycles().iter().map(|cycle| cycle.len() as u64))
    }

    #[must_use]
    pub fn parity(&self) -> Parity {
        let transpositions: usize = self.cycles().iter().map(|cycle| cycle.len() - 1).sum();

        if transpositions % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

fn parse_point<const N: usize>(token: &str) -> Result<usize, CycleParseError> {
    token
        .parse::<usize>()
        .ok()
        .and_then(|point| point.checked_sub(1))
        .filter(|&index| index < N)
        .ok_or_else(|| CycleParseError::PointOutOfRange {
            point: token.to_owned(),
            size: N,
        })
}

impl<const N: usize> Default for Permutation<N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize> fmt::Display for Permutation<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cycles = self.cycles();

        if cycles.is_empty() {
            return f.write_str("(1)");
        }

        for cycle in cycles {
            write!(f, "({})", cycle.iter().join(" "))?;
        }

        Ok(())
    }
}

impl<const N: usize> FromStr for Permutation<N> {
    type Err = PermutationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_cycles(s)
    }
}

impl<const N: usize> TryFrom<&[usize]> for Permutation<N> {
    type Error = PermutationError;

    fn try_from(images: &[usize]) -> Result<Self, Self::Error> {
        Self::try_from_images(images)
    }
}

impl<const N: usize> Mul for Permutation<N> {
    type Output = Permutation<N>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(&rhs)
    }
}

impl<const N: usize> Mul<&Permutation<N>> for &Permutation<N> {
    type Output = Permutation<N>;

    fn mul(self, rhs: &Permutation<N>) -> Self::Output {
        self.compose(rhs)
    }
}
