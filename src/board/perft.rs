/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::time::Instant;

use super::Board;

/// Perform a perft at the specified depth, collecting only data about the number of possible positions (nodes).
///
/// This performs bulk counting, meaning that, at depth 1, it returns the number of available moves,
/// rather than making them, recursing again, and returning 1 for each terminal case.
/// If you do *not* want to use bulk counting, use [`perft_generic`].
///
/// The board is walked with [`Board::apply_move`] and [`Board::undo_move`], so it is left exactly as it was found.
///
/// # Example
/// ```
/// # use circular_chess::{perft, Board};
/// let mut board = Board::default();
/// assert_eq!(perft(&mut board, 1), 20);
/// assert_eq!(perft(&mut board, 2), 400);
/// assert_eq!(board, Board::default());
/// ```
#[inline(always)]
pub fn perft(board: &mut Board, depth: usize) -> u64 {
    perft_generic::<true, false>(board, depth)
}

/// Perform a splitperft at the specified depth, collecting only data about the number of possible positions (nodes),
/// and printing the number of nodes reachable after each move available at the root node.
///
/// This performs bulk counting below the root.
#[inline(always)]
pub fn splitperft(board: &mut Board, depth: usize) -> u64 {
    perft_generic::<true, true>(board, depth)
}

/// Generic version of `perft` that allows you to specify whether to perform bulk counting and splitperft.
///
/// If `BULK` is set to `true`, this will perform bulk counting.
/// If `SPLIT` is set to `true`, this will perform a splitperft.
pub fn perft_generic<const BULK: bool, const SPLIT: bool>(board: &mut Board, depth: usize) -> u64 {
    // Bulk counting; no need to recurse again just to apply a singular move and return 1.
    if BULK && !SPLIT && depth == 1 {
        return board.get_valid_moves().len() as u64;
    }
    // Recursion limit; return 1, since we're fathoming this node.
    else if depth == 0 {
        return 1;
    }

    // Recursively accumulate the nodes from the remaining depths
    board.get_valid_moves().into_iter().fold(0, |nodes, mv| {
        board.apply_move(mv);
        let new_nodes = perft_generic::<BULK, false>(board, depth - 1);
        board.undo_move();

        if SPLIT {
            println!("{mv}\t{new_nodes}");
        }

        nodes + new_nodes
    })
}

/// Runs a perft (or splitperft, if `SPLIT` is set) on `board` and prints the node count, elapsed time, and speed.
pub fn print_perft<const BULK: bool, const SPLIT: bool>(board: &mut Board, depth: usize) -> u64 {
    let now = Instant::now();
    let nodes = perft_generic::<BULK, SPLIT>(board, depth);
    let elapsed = now.elapsed();

    let nps = (nodes as f64 / elapsed.as_secs_f64()) as u64;
    let m_nps = nodes as f64 / elapsed.as_secs_f64() / 1_000_000.0;

    if SPLIT {
        println!();
    }
    println!("Nodes: {nodes}");
    println!("Time: {:.2?}", elapsed);
    println!("NPS: {nps} ({m_nps:.2} Mnps)");

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Piece};

    #[test]
    fn test_bulk_and_full_counts_agree() {
        let mut board = Board::default();
        for depth in 0..=3 {
            assert_eq!(
                perft_generic::<true, false>(&mut board, depth),
                perft_generic::<false, false>(&mut board, depth),
                "depth {depth}"
            );
        }
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_splitperft_matches_perft() {
        let mut board = Board::default();
        assert_eq!(splitperft(&mut board, 2), perft(&mut board, 2));
    }

    #[test]
    fn test_lone_king() {
        let mut board = Board::new();
        board.place(Piece::WHITE_KING, Cell::new(1, 0).unwrap());

        assert_eq!(perft(&mut board, 0), 1);
        assert_eq!(perft(&mut board, 1), 8);

        // Black has nothing to move
        assert_eq!(perft(&mut board, 2), 0);
    }
}
