/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, hash::Hash};

use anyhow::{bail, Context, Result};

use super::{Board, BoardError, Cell, Piece};

/// Largest number of moves a single piece can have: a Queen's 15 sector moves, 3 annulus moves, and 6 diagonal moves.
pub const MAX_PIECE_MOVES: usize = 24;

/// Upper bound on the number of moves available in any position.
pub const MAX_NUM_MOVES: usize = Cell::COUNT * MAX_PIECE_MOVES;

/// An alias for an [`arrayvec::ArrayVec`] containing at most [`MAX_NUM_MOVES`] moves.
pub type MoveList = arrayvec::ArrayVec<Move, MAX_NUM_MOVES>;

/// Represents the different kinds of moves that can be made on the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub enum MoveKind {
    /// A single piece moves onto an empty cell.
    Quiet,

    /// A Pawn advances two sectors from its starting sector.
    PawnDoublePush,

    /// A piece moves onto a cell occupied by an opponent's piece, removing it from the board.
    Capture,
}

impl MoveKind {
    /// Determines the [`MoveKind`] of `piece` moving from `from` to `to`, given what occupies `to`.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::{Cell, MoveKind, Piece};
    /// let from = Cell::new(3, 10).unwrap();
    /// let to = Cell::new(3, 8).unwrap();
    /// assert_eq!(MoveKind::new(Piece::WHITE_PAWN, from, to, None), MoveKind::PawnDoublePush);
    /// assert_eq!(MoveKind::new(Piece::WHITE_ROOK, from, to, None), MoveKind::Quiet);
    /// assert_eq!(MoveKind::new(Piece::WHITE_ROOK, from, to, Some(Piece::BLACK_PAWN)), MoveKind::Capture);
    /// ```
    #[inline(always)]
    pub const fn new(piece: Piece, from: Cell, to: Cell, captured: Option<Piece>) -> Self {
        if captured.is_some() {
            Self::Capture
        } else if piece.is_pawn()
            && from.annulus() == to.annulus()
            && from.distance_sectors(to) == 2
        {
            Self::PawnDoublePush
        } else {
            Self::Quiet
        }
    }
}

impl fmt::Display for MoveKind {
    /// Displays a human-readable description for this [`MoveKind`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Quiet => "Quiet",
            Self::PawnDoublePush => "Pawn Double Push",
            Self::Capture => "Capture",
        };

        write!(f, "{s}")
    }
}

/// A transition of one piece between two cells.
///
/// A [`Move`] is a value: it holds a copy of the piece that moved and of whatever stood on the destination
/// when it was created, so it can be reversed later regardless of what happened to the board since.
///
/// Two moves are equal when they share the same start and end cells.
/// The moved and captured pieces are informational and play no part in equality or hashing.
#[derive(Clone, Copy)]
pub struct Move {
    from: Cell,
    to: Cell,
    piece: Piece,
    captured: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    /// Creates a new [`Move`] of `piece` from `from` to `to`, capturing `captured` if it is provided.
    #[inline(always)]
    pub const fn new(from: Cell, to: Cell, piece: Piece, captured: Option<Piece>) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
            kind: MoveKind::new(piece, from, to, captured),
        }
    }

    /// Creates a new [`Move`] by reading the contents of `from` and `to` off of `board`.
    ///
    /// No legality checks are performed; the only requirement is that `from` holds a piece.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::{Board, Cell, Move, MoveKind, Piece};
    /// let board = Board::default();
    /// let mv = Move::from_board(&board, Cell::new(3, 10).unwrap(), Cell::new(3, 8).unwrap()).unwrap();
    /// assert_eq!(mv.piece(), Piece::WHITE_PAWN);
    /// assert_eq!(mv.captured(), None);
    /// assert_eq!(mv.kind(), MoveKind::PawnDoublePush);
    /// ```
    pub fn from_board(board: &Board, from: Cell, to: Cell) -> Result<Self, BoardError> {
        let piece = board
            .piece_at(from)
            .ok_or(BoardError::EmptyCell { cell: from })?;

        Ok(Self::new(from, to, piece, board.piece_at(to)))
    }

    /// Parses a move written as two concatenated cells (such as `c4c2`), reading the pieces involved off of `board`.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::{Board, Cell, Move};
    /// let board = Board::default();
    /// let mv = Move::from_coords(&board, "b4d4").unwrap();
    /// assert_eq!(mv.from(), Cell::new(3, 10).unwrap());
    /// assert_eq!(mv.to(), Cell::new(3, 8).unwrap());
    ///
    /// assert!(Move::from_coords(&board, "c4c3").is_err()); // Nothing on c4
    /// assert!(Move::from_coords(&board, "b4").is_err());
    /// ```
    pub fn from_coords(board: &Board, mv: &str) -> Result<Self> {
        let (from, to) = match (mv.get(0..2), mv.get(2..4), mv.len()) {
            (Some(from), Some(to), 4) => (from, to),
            _ => bail!("Move strings must be two cells such as \"b4d4\". Got {mv:?}"),
        };

        let from = Cell::from_notation(from).context("Invalid start cell")?;
        let to = Cell::from_notation(to).context("Invalid end cell")?;

        Ok(Self::from_board(board, from, to)?)
    }

    /// Fetches the start cell of this [`Move`].
    #[inline(always)]
    pub const fn from(&self) -> Cell {
        self.from
    }

    /// Fetches the end cell of this [`Move`].
    #[inline(always)]
    pub const fn to(&self) -> Cell {
        self.to
    }

    /// Fetches the piece that was on the start cell when this [`Move`] was created.
    #[inline(always)]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// Fetches the piece that was on the end cell when this [`Move`] was created, if any.
    #[inline(always)]
    pub const fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Fetches the [`MoveKind`] of this [`Move`].
    #[inline(always)]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Writes this [`Move`] in notation.
    ///
    /// Non-captures are written as the piece letter followed by the destination (`Nc4`).
    /// Captures are written as the piece letter, the start cell, `x`, the captured piece's letter, and the destination (`Rc4xc3`).
    /// Pawns are written without a letter.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::{Cell, Move, Piece};
    /// let c4 = Cell::new(3, 9).unwrap();
    /// let c3 = Cell::new(2, 9).unwrap();
    ///
    /// let quiet = Move::new(c4, c3, Piece::WHITE_ROOK, None);
    /// assert_eq!(quiet.to_notation(), "Rc3");
    ///
    /// let capture = Move::new(c4, c3, Piece::WHITE_ROOK, Some(Piece::BLACK_PAWN));
    /// assert_eq!(capture.to_notation(), "Rc4xc3");
    ///
    /// let capture = Move::new(c3, c4, Piece::BLACK_PAWN, Some(Piece::WHITE_KNIGHT));
    /// assert_eq!(capture.to_notation(), "c3xNc4");
    /// ```
    pub fn to_notation(&self) -> String {
        let mut notation = String::with_capacity(7);

        if let Some(letter) = self.piece.kind().notation() {
            notation.push(letter);
        }

        if let Some(captured) = self.captured {
            notation.push_str(&self.from.to_notation());
            notation.push('x');
            if let Some(letter) = captured.kind().notation() {
                notation.push(letter);
            }
        }

        notation.push_str(&self.to.to_notation());
        notation
    }
}

impl PartialEq for Move {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl PartialEq<&str> for Move {
    /// Compares this [`Move`] against its coordinate string, such as `b4d4`.
    #[inline(always)]
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl fmt::Display for Move {
    /// Displays this [`Move`] as its start and end cells, such as `b4d4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} ({} {})", self.piece.name(), self.kind)
    }
}
