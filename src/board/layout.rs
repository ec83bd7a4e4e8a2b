/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::str::FromStr;

use anyhow::{bail, Context, Result};

use super::{Board, Cell, Color, Piece, PieceKind};

/// Layout string of the starting position.
pub const LAYOUT_STARTPOS: &str =
    "2prrp4PRRP2/2pnnp4PNNP2/2pbbp4PBBP2/2pqkp4PKQP2 w";

/// First sector of the four-cell block each side occupies, on the sector-ascending side of the board.
const BLACK_BLOCK_START: usize = 2;

/// Pieces in each annulus, innermost first, as they appear on ascending sectors within Black's block.
///
/// White's block is the mirror image: the piece on sector `s` for Black sits on sector `15 - s` for White.
const HOME_ROWS: [[PieceKind; 4]; Cell::ANNULI] = {
    use PieceKind::*;
    [
        [Pawn, Queen, King, Pawn],
        [Pawn, Bishop, Bishop, Pawn],
        [Pawn, Knight, Knight, Pawn],
        [Pawn, Rook, Rook, Pawn],
    ]
};

/// Contents of every cell at the start of a game, indexed by annulus and then sector.
pub const STARTING_SQUARES: [[Option<Piece>; Cell::SECTORS]; Cell::ANNULI] = {
    let mut squares = [[None; Cell::SECTORS]; Cell::ANNULI];

    let mut annulus = 0;
    while annulus < Cell::ANNULI {
        let mut i = 0;
        while i < HOME_ROWS[annulus].len() {
            let kind = HOME_ROWS[annulus][i];
            let sector = BLACK_BLOCK_START + i;
            squares[annulus][sector] = Some(Piece::new(Color::Black, kind));
            squares[annulus][Cell::SECTORS - 1 - sector] = Some(Piece::new(Color::White, kind));
            i += 1;
        }
        annulus += 1;
    }

    squares
};

impl Board {
    /// Constructs a [`Board`] from the provided layout string.
    ///
    /// A layout lists the annuli from the outermost (`4`) to the innermost (`1`), separated by `/`.
    /// Within an annulus, cells are listed by ascending sector: a piece character (uppercase for White)
    /// or a decimal count of consecutive empty cells. The side to move (`w` or `b`) may follow after a space,
    /// and defaults to White. The history of the new board is empty.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::{Board, Cell, Color, Piece};
    /// let board = Board::from_layout("16/16/2q13/R15 b").unwrap();
    /// assert_eq!(board.piece_at(Cell::new(1, 2).unwrap()), Some(Piece::BLACK_QUEEN));
    /// assert_eq!(board.piece_at(Cell::new(0, 0).unwrap()), Some(Piece::WHITE_ROOK));
    /// assert_eq!(board.side_to_move(), Color::Black);
    ///
    /// assert!(Board::from_layout("16/16/16").is_err());
    /// assert!(Board::from_layout("16/16/16/17").is_err());
    /// ```
    pub fn from_layout(layout: &str) -> Result<Self> {
        let mut board = Self::new();

        let mut fields = layout.split_whitespace();
        let Some(placements) = fields.next() else {
            bail!("Layout string is empty");
        };

        if let Some(side) = fields.next() {
            let mut chars = side.chars();
            let (Some(side), None) = (chars.next(), chars.next()) else {
                bail!("Side to move must be a single character. Got {side:?}");
            };
            board.set_side_to_move(Color::from_char(side)?);
        }

        if let Some(extra) = fields.next() {
            bail!("Unexpected trailing field in layout string: {extra:?}");
        }

        let rows = placements.split('/').collect::<Vec<_>>();
        if rows.len() != Cell::ANNULI {
            bail!(
                "Layout must have placements for all {} annuli. Got {}",
                Cell::ANNULI,
                rows.len()
            );
        }

        // Outermost annulus comes first
        for (annulus, row) in rows.into_iter().rev().enumerate() {
            let rank = annulus + 1;
            let mut sector = 0;
            let mut chars = row.chars().peekable();

            while let Some(c) = chars.next() {
                if let Some(digit) = c.to_digit(10) {
                    let mut empty = digit as usize;
                    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                        empty = empty * 10 + digit as usize;
                        chars.next();

                        // Stop before a long digit run can overflow
                        if empty > Cell::SECTORS {
                            bail!("Annulus {rank} has more than {} cells", Cell::SECTORS);
                        }
                    }

                    if empty == 0 {
                        bail!("Empty-cell counts must be positive on annulus {rank}");
                    }
                    if sector + empty > Cell::SECTORS {
                        bail!("Annulus {rank} has more than {} cells", Cell::SECTORS);
                    }
                    sector += empty;
                } else {
                    let piece = Piece::from_char(c)
                        .with_context(|| format!("Invalid cell contents on annulus {rank}"))?;

                    if sector >= Cell::SECTORS {
                        bail!("Annulus {rank} has more than {} cells", Cell::SECTORS);
                    }
                    board.place(piece, Cell::new_unchecked(annulus as u8, sector as u8));
                    sector += 1;
                }
            }

            if sector != Cell::SECTORS {
                bail!(
                    "Annulus {rank} must describe exactly {} cells. Got {sector}",
                    Cell::SECTORS
                );
            }
        }

        Ok(board)
    }

    /// Generates the layout string of this [`Board`].
    ///
    /// # Example
    /// ```
    /// # use circular_chess::{Board, LAYOUT_STARTPOS};
    /// assert_eq!(Board::default().to_layout(), LAYOUT_STARTPOS);
    /// assert_eq!(Board::new().to_layout(), "16/16/16/16 w");
    /// ```
    pub fn to_layout(&self) -> String {
        let mut rows = Vec::with_capacity(Cell::ANNULI);

        for annulus in (0..Cell::ANNULI as u8).rev() {
            let mut row = String::new();
            let mut empty = 0;

            for sector in 0..Cell::SECTORS as u8 {
                if let Some(piece) = self.piece_at(Cell::new_unchecked(annulus, sector)) {
                    if empty != 0 {
                        row += &empty.to_string();
                        empty = 0;
                    }
                    row.push(piece.char());
                } else {
                    empty += 1;
                }
            }

            if empty != 0 {
                row += &empty.to_string();
            }
            rows.push(row);
        }

        format!("{} {}", rows.join("/"), self.side_to_move().char())
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;
    /// Wrapper for [`Board::from_layout`].
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_layout(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_matches_starting_squares() {
        let parsed = Board::from_layout(LAYOUT_STARTPOS).unwrap();
        assert_eq!(parsed, Board::default());
    }

    #[test]
    fn test_starting_squares() {
        let board = Board::default();
        assert_eq!(board.pieces().count(), 32);

        let at = |annulus, sector| board.piece_at(Cell::new(annulus, sector).unwrap());
        assert_eq!(at(0, 3), Some(Piece::BLACK_QUEEN));
        assert_eq!(at(0, 4), Some(Piece::BLACK_KING));
        assert_eq!(at(0, 11), Some(Piece::WHITE_KING));
        assert_eq!(at(0, 12), Some(Piece::WHITE_QUEEN));

        for annulus in 0..Cell::ANNULI as u8 {
            assert_eq!(at(annulus, 2), Some(Piece::BLACK_PAWN));
            assert_eq!(at(annulus, 5), Some(Piece::BLACK_PAWN));
            assert_eq!(at(annulus, 10), Some(Piece::WHITE_PAWN));
            assert_eq!(at(annulus, 13), Some(Piece::WHITE_PAWN));

            for sector in [0, 1, 6, 7, 8, 9, 14, 15] {
                assert_eq!(at(annulus, sector), None);
            }
        }

        assert_eq!(at(1, 3), Some(Piece::BLACK_BISHOP));
        assert_eq!(at(2, 12), Some(Piece::WHITE_KNIGHT));
        assert_eq!(at(3, 11), Some(Piece::WHITE_ROOK));
    }

    #[test]
    fn test_layout_round_trips_after_moves() {
        let mut board = Board::default();
        board.make_move_str("b4d4").unwrap();
        board.make_move_str("j4l4").unwrap();

        let layout = board.to_layout();
        assert_eq!(layout, "p2rrp2P2RRP2/2pnnp4PNNP2/2pbbp4PBBP2/2pqkp4PKQP2 w");

        let parsed: Board = layout.parse().unwrap();
        assert_eq!(parsed.to_layout(), layout);
        assert!(parsed.history().is_empty());
    }

    #[test]
    fn test_invalid_layouts() {
        // Wrong number of annuli
        assert!(Board::from_layout("").is_err());
        assert!(Board::from_layout("16/16/16/16/16").is_err());

        // Wrong number of cells
        assert!(Board::from_layout("15/16/16/16").is_err());
        assert!(Board::from_layout("K16/16/16/16").is_err());
        assert!(Board::from_layout("0K15/16/16/16").is_err());
        assert!(Board::from_layout("8K8/16/16/16").is_err());

        // Long digit runs are rejected rather than overflowing
        assert!(Board::from_layout("99999999999999999999999/16/16/16").is_err());

        // Bad characters
        assert!(Board::from_layout("X15/16/16/16").is_err());
        assert!(Board::from_layout("16/16/16/16 x").is_err());
        assert!(Board::from_layout("16/16/16/16 w extra").is_err());
    }
}
