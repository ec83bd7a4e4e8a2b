/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use circular_chess::{perft_generic, Board};

fn test_perft_layout_nodes(depth: usize, layout: &str, expected: u64) {
    let mut board = Board::from_layout(layout).unwrap();
    let before = board.clone();

    let res = perft_generic::<false, false>(&mut board, depth);
    assert_eq!(res, expected, "PERFT({depth}) failed on {layout}");
    assert_eq!(board, before, "PERFT({depth}) did not restore {layout}");
}

#[cfg(test)]
mod startpos_perft {
    use circular_chess::LAYOUT_STARTPOS;

    use crate::test_perft_layout_nodes;

    #[test]
    fn test_startpos_perft_1() {
        test_perft_layout_nodes(1, LAYOUT_STARTPOS, 20);
    }

    #[test]
    fn test_startpos_perft_2() {
        test_perft_layout_nodes(2, LAYOUT_STARTPOS, 400);
    }

    #[test]
    fn test_startpos_perft_3() {
        test_perft_layout_nodes(3, LAYOUT_STARTPOS, 8584);
    }

    #[test]
    fn test_startpos_perft_4() {
        test_perft_layout_nodes(4, LAYOUT_STARTPOS, 184031);
    }

    #[test]
    fn test_black_to_move_perft_1() {
        let layout = LAYOUT_STARTPOS.replace(" w", " b");
        test_perft_layout_nodes(1, &layout, 20);
    }
}

#[cfg(test)]
mod sparse_perft {
    use crate::test_perft_layout_nodes;

    #[test]
    fn test_lone_rook() {
        // Fifteen sector moves and three annulus moves
        test_perft_layout_nodes(1, "16/16/16/R15 w", 18);
    }

    #[test]
    fn test_lone_queen() {
        test_perft_layout_nodes(1, "16/Q15/16/16 w", 24);
    }

    #[test]
    fn test_kings_only() {
        // Each King has 5 moves from the innermost annulus, and they are far apart
        test_perft_layout_nodes(1, "16/16/16/K7k8 w", 5);
        test_perft_layout_nodes(2, "16/16/16/K7k8 w", 25);
    }
}
