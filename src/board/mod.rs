/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Addressing of cells by annulus and sector, including sector wraparound.
mod cell;

/// Errors produced by the rules core.
mod error;

/// Starting layout and textual layout strings.
mod layout;

/// Per-piece move generation.
mod movegen;

/// Moves and their notation.
mod moves;

/// Pawn orientation, derived from hemisphere and color.
mod pawn;

/// Node counting over the move tree.
mod perft;

/// Colors, piece kinds, and pieces.
mod piece;

/// The board state machine: grid, side to move, and history.
mod state;

pub use cell::*;
pub use error::*;
pub use layout::*;
pub use movegen::*;
pub use moves::*;
pub use pawn::*;
pub use perft::*;
pub use piece::*;
pub use state::*;
