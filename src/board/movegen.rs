/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::iter::FusedIterator;

use super::{Board, Cell, Move, MoveList, PawnOrientation, Piece, PieceKind};

/// `(annulus, sector)` deltas a Rook slides along: around its annulus both ways, and outward/inward along its sector.
pub const ROOK_DELTAS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// `(annulus, sector)` deltas a Bishop slides along.
pub const BISHOP_DELTAS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// `(annulus, sector)` deltas a Queen slides along; the union of [`ROOK_DELTAS`] and [`BISHOP_DELTAS`].
pub const QUEEN_DELTAS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// `(annulus, sector)` offsets a Knight jumps to.
#[rustfmt::skip]
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2), (1, -2), (-1, 2), (-1, -2),
    (2, 1), (2, -1), (-2, 1), (-2, -1),
];

/// `(annulus, sector)` offsets a King steps to.
#[rustfmt::skip]
pub const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// An iterator over the cells reached by repeatedly stepping from an origin by a fixed delta.
///
/// The origin itself is never yielded. The ray ends when the annulus leaves the board,
/// or when the sector has wrapped all the way around and the next step would land back on the origin.
/// Blocking pieces are not considered; that is up to the caller.
///
/// # Example
/// ```
/// # use circular_chess::{Cell, Ray};
/// let origin = Cell::new(2, 0).unwrap();
///
/// // Around the annulus: the fifteen other sectors, stopping short of the origin
/// assert_eq!(Ray::new(origin, 0, 1).count(), 15);
///
/// // Outward: a single annulus remains
/// let outward = Ray::new(origin, 1, 0).collect::<Vec<_>>();
/// assert_eq!(outward, [Cell::new(3, 0).unwrap()]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    origin: Cell,
    current: Cell,
    annulus_delta: i8,
    sector_delta: i8,
}

impl Ray {
    /// Creates a new [`Ray`] from `origin` in the direction of the provided deltas.
    #[inline(always)]
    pub const fn new(origin: Cell, annulus_delta: i8, sector_delta: i8) -> Self {
        Self {
            origin,
            current: origin,
            annulus_delta,
            sector_delta,
        }
    }
}

impl Iterator for Ray {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.current.offset(self.annulus_delta, self.sector_delta)?;

        // Sectors are cyclic, so a ray around an annulus has no edge to stop at
        if next == self.origin {
            return None;
        }

        self.current = next;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(Cell::SECTORS - 1))
    }
}

impl FusedIterator for Ray {}

impl Board {
    /// Generate every move available to the side to move.
    ///
    /// Moves are geometrically legal: they respect blocking and never capture a friendly piece.
    /// Whether a move exposes the mover's own King is not considered.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::Board;
    /// let board = Board::default();
    /// assert_eq!(board.get_all_moves().len(), 20);
    /// ```
    pub fn get_all_moves(&self) -> MoveList {
        let color = self.side_to_move();
        let mut moves = MoveList::new();

        for (cell, piece) in self.pieces().filter(|(_, piece)| piece.color() == color) {
            self.generate_moves_for(piece, cell, &mut moves);
        }

        moves
    }

    /// Generate every move available to the piece on `cell`.
    ///
    /// If `cell` is empty or holds a piece that does not belong to the side to move, no moves are generated.
    ///
    /// # Example
    /// ```
    /// # use circular_chess::{Board, Cell};
    /// let board = Board::default();
    /// let mut pawn_moves = board.get_moves_from(Cell::new(3, 10).unwrap()).into_iter();
    ///
    /// assert_eq!(pawn_moves.next().unwrap(), "b4c4");
    /// assert_eq!(pawn_moves.next().unwrap(), "b4d4");
    /// assert!(pawn_moves.next().is_none());
    ///
    /// // Black's pieces cannot move on White's turn
    /// assert!(board.get_moves_from(Cell::new(3, 2).unwrap()).is_empty());
    /// ```
    pub fn get_moves_from(&self, cell: Cell) -> MoveList {
        let mut moves = MoveList::new();

        if let Some(piece) = self
            .piece_at(cell)
            .filter(|piece| piece.color() == self.side_to_move())
        {
            self.generate_moves_for(piece, cell, &mut moves);
        }

        moves
    }

    /// Generate all moves `piece` could make from `from`, appending them to `moves`.
    ///
    /// `piece` is not required to stand on `from` nor to belong to the side to move.
    pub fn generate_moves_for(&self, piece: Piece, from: Cell, moves: &mut MoveList) {
        match piece.kind() {
            PieceKind::Pawn => self.generate_pawn_moves(piece, from, moves),
            PieceKind::Knight => self.generate_step_moves(piece, from, &KNIGHT_DELTAS, moves),
            PieceKind::Bishop => self.generate_slider_moves(piece, from, &BISHOP_DELTAS, moves),
            PieceKind::Rook => self.generate_slider_moves(piece, from, &ROOK_DELTAS, moves),
            PieceKind::Queen => self.generate_slider_moves(piece, from, &QUEEN_DELTAS, moves),
            PieceKind::King => self.generate_step_moves(piece, from, &KING_DELTAS, moves),
        }
    }

    /// Returns `true` if `to` is empty or holds a piece that `piece` may capture.
    #[inline(always)]
    fn can_land_on(&self, piece: Piece, to: Cell) -> bool {
        self.piece_at(to)
            .map_or(true, |victim| victim.is_enemy_of(&piece))
    }

    /// Creates a [`Move`] from the current contents of `from` and `to`, and appends it to `moves`.
    #[inline(always)]
    fn serialize_move(&self, piece: Piece, from: Cell, to: Cell, moves: &mut MoveList) {
        moves.push(Move::new(from, to, piece, self.piece_at(to)));
    }

    fn generate_pawn_moves(&self, piece: Piece, from: Cell, moves: &mut MoveList) {
        let pawn = PawnOrientation::of(piece.color(), from);

        // No promotion, so a Pawn that has reached its last sector stays there
        if pawn.is_exhausted_on(from.sector()) {
            return;
        }

        let forward = pawn.direction();

        // Single step, then a double step if still on the starting sector
        if let Some(one) = from.offset(0, forward).filter(|&to| self.is_empty(to)) {
            self.serialize_move(piece, from, one, moves);

            if pawn.can_double_step_from(from.sector()) {
                if let Some(two) = one.offset(0, forward).filter(|&to| self.is_empty(to)) {
                    self.serialize_move(piece, from, two, moves);
                }
            }
        }

        // Diagonal captures: one step forward while changing annulus by one
        for annulus_delta in [-1, 1] {
            let Some(to) = from.offset(annulus_delta, forward) else {
                continue;
            };

            if self
                .piece_at(to)
                .is_some_and(|victim| victim.is_enemy_of(&piece))
            {
                self.serialize_move(piece, from, to, moves);
            }
        }
    }

    fn generate_step_moves(
        &self,
        piece: Piece,
        from: Cell,
        deltas: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        for &(annulus_delta, sector_delta) in deltas {
            if let Some(to) = from.offset(annulus_delta, sector_delta) {
                if self.can_land_on(piece, to) {
                    self.serialize_move(piece, from, to, moves);
                }
            }
        }
    }

    fn generate_slider_moves(
        &self,
        piece: Piece,
        from: Cell,
        deltas: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        let first = moves.len();

        for &(annulus_delta, sector_delta) in deltas {
            for to in Ray::new(from, annulus_delta, sector_delta) {
                let victim = self.piece_at(to);

                // Both rays around an annulus can reach the same cell, so only keep it once
                if self.can_land_on(piece, to) && !moves[first..].iter().any(|mv| mv.to() == to) {
                    self.serialize_move(piece, from, to, moves);
                }

                if victim.is_some() {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, MoveKind, MAX_PIECE_MOVES};

    fn cell(annulus: u8, sector: u8) -> Cell {
        Cell::new(annulus, sector).unwrap()
    }

    /// Generates moves for `piece` alone on an otherwise empty board.
    fn lone_moves(piece: Piece, from: Cell) -> MoveList {
        let mut board = Board::new();
        board.place(piece, from);
        if piece.color() != board.side_to_move() {
            board.toggle_side_to_move();
        }
        board.get_moves_from(from)
    }

    #[test]
    fn test_ray_terminates() {
        for origin in Cell::iter() {
            for (annulus_delta, sector_delta) in QUEEN_DELTAS {
                let len = Ray::new(origin, annulus_delta, sector_delta).count();
                if annulus_delta == 0 {
                    assert_eq!(len, Cell::SECTORS - 1);
                } else {
                    assert!(len < Cell::ANNULI, "{origin:?} {annulus_delta} {sector_delta}");
                }
            }
        }

        assert_eq!(Ray::new(cell(1, 1), 0, 0).next(), None);
    }

    #[test]
    fn test_lone_piece_move_counts() {
        for from in Cell::iter() {
            let annulus = from.annulus() as usize;
            let inner = annulus > 0;
            let outer = annulus < Cell::ANNULI - 1;

            let rook = lone_moves(Piece::WHITE_ROOK, from);
            assert_eq!(rook.len(), Cell::SECTORS - 1 + Cell::ANNULI - 1, "{from:?}");

            let bishop = lone_moves(Piece::BLACK_BISHOP, from);
            assert_eq!(bishop.len(), 2 * (Cell::ANNULI - 1), "{from:?}");

            let queen = lone_moves(Piece::WHITE_QUEEN, from);
            assert_eq!(queen.len(), MAX_PIECE_MOVES, "{from:?}");

            let king = lone_moves(Piece::BLACK_KING, from);
            let expected = 2 + 3 * (inner as usize) + 3 * (outer as usize);
            assert_eq!(king.len(), expected, "{from:?}");

            let knight = lone_moves(Piece::WHITE_KNIGHT, from);
            let expected = match annulus {
                0 | 3 => 4,
                _ => 6,
            };
            assert_eq!(knight.len(), expected, "{from:?}");
        }
    }

    #[test]
    fn test_rook_around_single_blocker() {
        // A lone enemy on the same annulus is reached from both sides but listed once
        let mut board = Board::new();
        board.place(Piece::WHITE_ROOK, cell(1, 0));
        board.place(Piece::BLACK_KNIGHT, cell(1, 8));

        let moves = board.get_moves_from(cell(1, 0));
        let captures = moves.iter().filter(|mv| mv.captured().is_some()).count();
        assert_eq!(captures, 1);
        assert_eq!(moves.len(), Cell::SECTORS - 1 + Cell::ANNULI - 1);
    }

    #[test]
    fn test_rook_blocked_by_friend() {
        let mut board = Board::new();
        board.place(Piece::WHITE_ROOK, cell(2, 4));
        board.place(Piece::WHITE_PAWN, cell(2, 6));
        board.place(Piece::WHITE_PAWN, cell(2, 2));
        board.place(Piece::WHITE_PAWN, cell(3, 4));

        let moves = board.get_moves_from(cell(2, 4));
        let mut targets = moves.iter().map(|mv| mv.to()).collect::<Vec<_>>();
        targets.sort();
        assert_eq!(targets, [cell(0, 4), cell(1, 4), cell(2, 3), cell(2, 5)]);
    }

    #[test]
    fn test_bishop_wraps_sectors() {
        let mut board = Board::new();
        board.place(Piece::BLACK_BISHOP, cell(0, 15));
        board.place(Piece::WHITE_PAWN, cell(2, 1));
        board.toggle_side_to_move();

        let moves = board.get_moves_from(cell(0, 15));
        let mut targets = moves.iter().map(|mv| mv.to()).collect::<Vec<_>>();
        targets.sort();
        assert_eq!(targets, [cell(1, 0), cell(1, 14), cell(2, 1), cell(2, 13), cell(3, 12)]);
        assert!(moves.iter().any(|mv| mv.to() == cell(2, 1) && mv.captured().is_some()));
    }

    #[test]
    fn test_pawn_pushes_and_captures() {
        let mut board = Board::new();
        board.place(Piece::WHITE_PAWN, cell(1, 13));
        board.place(Piece::BLACK_ROOK, cell(2, 14));
        board.place(Piece::WHITE_ROOK, cell(0, 14));

        let moves = board.get_moves_from(cell(1, 13));
        let mut targets = moves.iter().map(|mv| mv.to()).collect::<Vec<_>>();
        targets.sort();
        // Double step, single step, and a capture outward; never the friendly Rook
        assert_eq!(targets, [cell(1, 14), cell(1, 15), cell(2, 14)]);
    }

    #[test]
    fn test_pawn_blocked() {
        let mut board = Board::new();
        board.place(Piece::BLACK_PAWN, cell(0, 5));
        board.place(Piece::WHITE_KNIGHT, cell(0, 6));
        board.toggle_side_to_move();

        // Pawns never capture straight ahead
        assert!(board.get_moves_from(cell(0, 5)).is_empty());

        // With the first step free but the second blocked, only the single step remains
        board.take(cell(0, 6));
        board.place(Piece::WHITE_KNIGHT, cell(0, 7));
        let moves = board.get_moves_from(cell(0, 5));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to(), cell(0, 6));
    }

    #[test]
    fn test_pawn_double_step_only_from_start() {
        let mut board = Board::new();
        board.place(Piece::WHITE_PAWN, cell(2, 9));

        let moves = board.get_moves_from(cell(2, 9));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].kind(), MoveKind::Quiet);
    }

    #[test]
    fn test_pawn_stops_on_last_sector() {
        let mut board = Board::new();
        board.place(Piece::WHITE_PAWN, cell(1, 3));
        board.place(Piece::WHITE_PAWN, cell(1, 4));
        board.place(Piece::BLACK_KING, cell(2, 4));
        assert!(board.get_all_moves().is_empty());
    }

    #[test]
    fn test_only_side_to_move_generates() {
        let board = Board::default();
        assert!(board
            .get_all_moves()
            .iter()
            .all(|mv| mv.piece().color() == Color::White));
    }
}
