//! Necessary conditions for a cube state to be reachable from solved by face turns.
//!
//! A state is the four-tuple of corner positions, corner twist, edge positions and edge
//! flip. Face turns preserve each of the checks below, so a state that fails any of them
//! can only be produced by disassembling the cube.

use crate::{
    orientation::{CornerOrientation, EdgeOrientation},
    permutation::{Parity, Permutation},
};
use log::debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    #[error("Corner twist sums to {residue} mod 3 instead of 0")]
    CornerTwist { residue: u8 },
    #[error("Edge flip sums to {residue} mod 2 instead of 0")]
    EdgeFlip { residue: u8 },
    #[error("Corner permutation is {corners:?} but edge permutation is {edges:?}")]
    ParityMismatch { corners: Parity, edges: Parity },
}

/// Check the twist, flip and parity invariants of a cube state.
///
/// # Errors
///
/// Returns the first invariant the state violates, checked in the order corner twist,
/// edge flip, parity.
pub fn check_reachable(
    corner_positions: &Permutation<8>,
    corner_orientation: &CornerOrientation,
    edge_positions: &Permutation<12>,
    edge_orientation: &EdgeOrientation,
) -> Result<(), InvariantError> {
    let result = check(
        corner_positions,
        corner_orientation,
        edge_positions,
        edge_orientation,
    );

    if let Err(e) = &result {
        debug!(
            "Unreachable state {corner_positions} [{corner_orientation}] {edge_positions} [{edge_orientation}]: {e}"
        );
    }

    result
}

fn check(
    corner_positions: &Permutation<8>,
    corner_orientation: &CornerOrientation,
    edge_positions: &Permutation<12>,
    edge_orientation: &EdgeOrientation,
) -> Result<(), InvariantError> {
    let residue = corner_orientation.residue();
    if residue != 0 {
        return Err(InvariantError::CornerTwist { residue });
    }

    let residue = edge_orientation.residue();
    if residue != 0 {
        return Err(InvariantError::EdgeFlip { residue });
    }

    let corners = corner_positions.parity();
    let edges = edge_positions.parity();
    if corners != edges {
        return Err(InvariantError::ParityMismatch { corners, edges });
    }

    Ok(())
}

#[must_use]
pub fn is_reachable(
    corner_positions: &Permutation<8>,
    corner_orientation: &CornerOrientation,
    edge_positions: &Permutation<12>,
    edge_orientation: &EdgeOrientation,
) -> bool {
    check_reachable(
        corner_positions,
        corner_orientation,
        edge_positions,
        edge_orientation,
    )
    .is_ok()
}
