/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::str::FromStr;

use clap::Parser;

use crate::{Cell, Piece};

/// A command to be sent to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    multicall = true,
    about,
    rename_all = "lower",
    override_usage("<SHELL COMMAND>")
)]
pub enum ShellCommand {
    /// Print a visual representation of the current board state.
    #[command(alias = "d")]
    Display,

    /// Quit the shell.
    #[command(aliases = ["quit", "q"])]
    Exit,

    /// Flips the side-to-move without moving a piece.
    Flip,

    /// Print every move applied so far, oldest first.
    History,

    /// Print the layout string of the current position.
    Layout,

    /// Replace the current position with the one described by a layout string.
    ///
    /// The history is cleared.
    Load {
        /// The layout string, such as `16/16/16/K7k8 w`.
        #[arg(required = true, num_args = 1..)]
        layout: Vec<String>,
    },

    /// Apply the provided move (such as `b4d4`) to the game, if it is legal.
    #[command(aliases = ["m", "move"])]
    MakeMove { mv_string: String },

    /// Shows all moves available in the current position, or for a specific piece.
    Moves {
        cell: Option<Cell>,

        /// If set, moves will be sorted by start and end cell.
        ///
        /// By default, moves are listed in generation order.
        #[arg(short, long, default_value = "false")]
        sort: bool,

        /// If set, moves will be printed in notation (such as `Rc4xc3`) rather than as coordinates.
        #[arg(short, long, default_value = "false")]
        notation: bool,
    },

    /// Restore the starting position and clear the history.
    #[command(alias = "new")]
    Reset,

    /// Performs a perft on the current position at the supplied depth, printing total node count.
    Perft { depth: usize },

    /// Place a piece on the provided cell.
    Place { piece: Piece, cell: Cell },

    /// Performs a split perft on the current position at the supplied depth.
    #[command(alias = "sperft")]
    Splitperft { depth: usize },

    /// Remove the piece at the provided cell.
    Take { cell: Cell },

    /// Reverse the most recently applied move.
    #[command(alias = "u")]
    Undo,
}

impl FromStr for ShellCommand {
    type Err = clap::Error;
    /// Attempt to parse a [`ShellCommand`] from a string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse_from(s.split_ascii_whitespace())
    }
}
