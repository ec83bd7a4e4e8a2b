/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use super::{BoardError, Cell, Color, Move, MoveList, Piece, STARTING_SQUARES};

/// A game of circular chess.
///
/// This type owns the `4x16` grid of cells, the side to move, and the history of every move applied so far.
/// It changes only through [`Board::apply_move`] (or its validated sibling [`Board::make_move_checked`]),
/// [`Board::undo_move`], [`Board::reset`], and the editing methods [`Board::place`] and [`Board::take`].
///
/// The basic methods you're probably looking for are [`Board::get_valid_moves`], [`Board::make_move_checked`], and [`Board::undo_move`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Contents of every cell, indexed by annulus and then sector.
    squares: [[Option<Piece>; Cell::SECTORS]; Cell::ANNULI],

    /// The side whose turn it is.
    side_to_move: Color,

    /// Every move applied so far, oldest first.
    history: Vec<Move>,
}

impl Board {
    /// Creates an empty [`Board`] with White to move.
    ///
    /// Use [`Board::default`] for the starting layout.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            squares: [[None; Cell::SECTORS]; Cell::ANNULI],
            side_to_move: Color::White,
            history: Vec::new(),
        }
    }

    /// Restores the starting layout, clears the history, and gives the move to White.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::Board;
    /// let mut board = Board::default();
    /// board.make_move_str("b4d4").unwrap();
    /// board.reset();
    /// assert_eq!(board, Board::default());
    /// ```
    pub fn reset(&mut self) {
        self.squares = STARTING_SQUARES;
        self.side_to_move = Color::White;
        self.history.clear();
    }

    /// Fetches the piece on `cell`, if there is one.
    #[inline(always)]
    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.squares[cell]
    }

    /// Fetches the piece at the provided annulus and sector, if there is one.
    ///
    /// Coordinates outside the board are rejected before the grid is touched.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::{Board, BoardError, Piece};
    /// let board = Board::default();
    /// assert_eq!(board.piece_at_checked(0, 11), Ok(Some(Piece::WHITE_KING)));
    /// assert_eq!(board.piece_at_checked(0, 0), Ok(None));
    /// assert!(matches!(board.piece_at_checked(4, 0), Err(BoardError::OutOfBoundsCell { .. })));
    /// ```
    #[inline(always)]
    pub fn piece_at_checked(&self, annulus: u8, sector: u8) -> Result<Option<Piece>, BoardError> {
        Ok(self.piece_at(Cell::new(annulus, sector)?))
    }

    /// Returns `true` if there is no piece on `cell`.
    #[inline(always)]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.squares[cell].is_none()
    }

    /// Places `piece` on `cell`, returning whatever was there before.
    #[inline(always)]
    pub fn place(&mut self, piece: Piece, cell: Cell) -> Option<Piece> {
        self.squares[cell].replace(piece)
    }

    /// Removes and returns the piece on `cell`, if there is one.
    #[inline(always)]
    pub fn take(&mut self, cell: Cell) -> Option<Piece> {
        self.squares[cell].take()
    }

    /// An iterator over every occupied cell and the piece on it.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        Cell::iter().filter_map(|cell| self.piece_at(cell).map(|piece| (cell, piece)))
    }

    /// The side whose turn it is.
    #[inline(always)]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Hands the move to the other side without moving a piece.
    #[inline(always)]
    pub fn toggle_side_to_move(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Sets the side to move.
    #[inline(always)]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Every move applied so far, oldest first.
    #[inline(always)]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The most recently applied move, if any.
    #[inline(always)]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Generate every move the side to move may make.
    ///
    /// Currently identical to [`Board::get_all_moves`]; this is where a filter for moves that
    /// leave the mover's King in check would go.
    #[inline(always)]
    pub fn get_valid_moves(&self) -> MoveList {
        self.get_all_moves()
    }

    /// Applies the provided [`Move`]. No enforcement of legality.
    ///
    /// The start cell is emptied and the moved piece written to the end cell, replacing any captured piece.
    /// The move is then appended to the history and the side to move flips.
    ///
    /// Only moves taken from [`Board::get_valid_moves`] on this exact board should be passed here;
    /// use [`Board::make_move_checked`] for anything else.
    #[inline(always)]
    pub fn apply_move(&mut self, mv: Move) {
        self.squares[mv.from()] = None;
        self.squares[mv.to()] = Some(mv.piece());
        self.history.push(mv);
        self.toggle_side_to_move();
    }

    /// Applies the move from `mv.from()` to `mv.to()` if it is legal. If it is not, returns an `Err` and leaves the board untouched.
    ///
    /// The move applied is the one produced by the move generator, so the pieces recorded in `mv` do not need to be accurate.
    /// Returns the move that was applied.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::{Board, BoardError, Cell, Move, Piece};
    /// let mut board = Board::default();
    ///
    /// let rook = Cell::new(3, 11).unwrap();
    /// let blocked = Move::new(rook, Cell::new(3, 9).unwrap(), Piece::WHITE_ROOK, None);
    /// assert!(matches!(board.make_move_checked(blocked), Err(BoardError::IllegalMove { .. })));
    ///
    /// let pawn = Move::from_coords(&board, "b4c4").unwrap();
    /// assert!(board.make_move_checked(pawn).is_ok());
    /// assert_eq!(board.history().len(), 1);
    /// ```
    pub fn make_move_checked(&mut self, mv: Move) -> Result<Move, BoardError> {
        let Some(legal) = self.get_valid_moves().into_iter().find(|legal| *legal == mv) else {
            return Err(BoardError::IllegalMove {
                mv,
                side: self.side_to_move,
            });
        };

        self.apply_move(legal);
        Ok(legal)
    }

    /// Parses the provided coordinate string (such as `b4d4`) into a [`Move`], and applies it if it is legal.
    ///
    /// Equivalent to calling [`Move::from_coords`] and [`Board::make_move_checked`].
    pub fn make_move_str(&mut self, mv_str: &str) -> anyhow::Result<Move> {
        let mv = Move::from_coords(self, mv_str)?;
        Ok(self.make_move_checked(mv)?)
    }

    /// Reverses the most recently applied move, returning it.
    ///
    /// The moved piece goes back to its start cell and whatever was captured (or nothing) goes back to the end cell.
    /// If there is no history, nothing happens and `None` is returned.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::Board;
    /// let mut board = Board::default();
    /// assert!(board.undo_move().is_none());
    /// assert_eq!(board, Board::default());
    /// ```
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;

        self.squares[mv.from()] = Some(mv.piece());
        self.squares[mv.to()] = mv.captured();
        self.toggle_side_to_move();

        Some(mv)
    }
}

impl Default for Board {
    /// Starting layout for circular chess.
    #[inline(always)]
    fn default() -> Self {
        let mut board = Self::new();
        board.reset();
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for annulus in (0..Cell::ANNULI as u8).rev() {
            write!(f, "{}|", annulus + 1)?;
            for sector in 0..Cell::SECTORS as u8 {
                let cell = Cell::new_unchecked(annulus, sector);
                let piece_char = self.piece_at(cell).map(|p| p.char()).unwrap_or('.');
                write!(f, " {piece_char}")?;
            }

            match annulus {
                3 => write!(f, "        Layout: {}", self.to_layout())?,
                2 => write!(f, "  Side to move: {}", self.side_to_move.name())?,
                1 => write!(f, "         Moves: {}", self.history.len())?,
                0 => {
                    if let Some(mv) = self.last_move() {
                        write!(f, "     Last move: {mv} ({})", mv.to_notation())?;
                    }
                }
                _ => {}
            }
            writeln!(f)?;
        }

        write!(f, " +")?;
        for _ in 0..Cell::SECTORS {
            write!(f, "--")?;
        }
        write!(f, "\n  ")?;
        for sector in 0..Cell::SECTORS as u8 {
            write!(f, " {}", Cell::new_unchecked(0, sector).file())?;
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let history = self
            .history
            .iter()
            .map(|mv| format!("{mv:?}"))
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "{self}\nHistory: [{history}]")
    }
}
