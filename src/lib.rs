/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// All rules of circular chess: cells, pieces, moves, move generation, and the board itself.
mod board;

/// Commands accepted by the interactive shell.
mod cli;

/// The interactive shell, which reads commands from `stdin` and applies them to a board.
mod shell;

pub use board::*;
pub use cli::*;
pub use shell::*;
