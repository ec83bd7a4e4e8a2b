/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

use super::{Cell, Color, Move};

/// Failures reported by the board when a request cannot be carried out.
///
/// Every variant aborts only the request that produced it; the [`Board`](super::Board) is left unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The annulus or sector lies outside the `4x16` grid.
    #[error(
        "Cell (annulus {annulus}, sector {sector}) is off the board: annuli are [0, {}) and sectors are [0, {})",
        Cell::ANNULI,
        Cell::SECTORS
    )]
    OutOfBoundsCell { annulus: i16, sector: i16 },

    /// The move is not among the moves available to the side to move.
    #[error("{mv} is not a legal move for {}", .side.name())]
    IllegalMove { mv: Move, side: Color },

    /// A move was requested from a cell that holds no piece.
    #[error("There is no piece on {cell} to move")]
    EmptyCell { cell: Cell },
}
