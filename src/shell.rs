/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    io,
    sync::mpsc::{channel, Receiver, Sender},
    thread,
};

use anyhow::{bail, Context, Result};

use crate::{print_perft, Board, Cell, ShellCommand};

/// An interactive session over a single circular chess [`Board`].
#[derive(Debug)]
pub struct Shell {
    /// The current state of the game.
    ///
    /// This is modified whenever moves are played or new layouts are loaded,
    /// and is restored to the starting layout by the `reset` command.
    board: Board,

    /// One half of a channel, responsible for sending commands to the shell to execute.
    sender: Sender<ShellCommand>,

    /// One half of a channel, responsible for receiving commands for the shell to execute.
    receiver: Receiver<ShellCommand>,
}

impl Shell {
    /// Constructs a new [`Shell`] at the starting layout, to be executed with [`Shell::run`].
    pub fn new() -> Self {
        let (sender, receiver) = channel();

        Self {
            board: Board::default(),
            sender,
            receiver,
        }
    }

    /// Returns a string of the shell's name and current version.
    pub fn name(&self) -> String {
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// The board this shell is operating on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Queues a [`ShellCommand`] to be executed once [`Shell::run`] is called.
    pub fn send_command(&self, command: ShellCommand) -> Result<()> {
        self.sender
            .send(command)
            .context("Failed to queue command for the shell")
    }

    /// Execute the main event loop for the shell.
    ///
    /// This function spawns a thread to handle input from `stdin` and executes commands in the order they are received.
    /// Commands queued with [`Shell::send_command`] beforehand run first.
    pub fn run(&mut self) -> Result<()> {
        println!("{}", self.name());

        let sender = self.sender.clone();
        thread::spawn(|| {
            if let Err(err) = input_handler(sender) {
                eprintln!("Input handler thread stopping after fatal error: {err}");
            }
        });

        while let Ok(cmd) = self.receiver.recv() {
            match self.execute(cmd) {
                Ok(true) => {}
                Ok(false) => break,

                // Keep running, even on error
                Err(e) => eprintln!("Error: {e}"),
            }
        }

        Ok(())
    }

    /// Executes a single [`ShellCommand`], returning `false` if the shell should stop.
    pub fn execute(&mut self, cmd: ShellCommand) -> Result<bool> {
        match cmd {
            ShellCommand::Display => println!("{}", self.board),

            ShellCommand::Exit => return Ok(false),

            ShellCommand::Flip => self.board.toggle_side_to_move(),

            ShellCommand::History => self.history(),

            ShellCommand::Layout => println!("{}", self.board.to_layout()),

            ShellCommand::Load { layout } => self.board = layout.join(" ").parse()?,

            ShellCommand::MakeMove { mv_string } => {
                let mv = self.board.make_move_str(&mv_string)?;
                println!("{}", mv.to_notation());
            }

            ShellCommand::Moves {
                cell,
                sort,
                notation,
            } => self.moves(cell, sort, notation),

            ShellCommand::Reset => self.board.reset(),

            ShellCommand::Perft { depth } => {
                print_perft::<true, false>(&mut self.board, depth);
            }

            ShellCommand::Place { piece, cell } => {
                if let Some(old) = self.board.place(piece, cell) {
                    println!("Replaced {} on {cell}", old.name());
                }
            }

            ShellCommand::Splitperft { depth } => {
                print_perft::<true, true>(&mut self.board, depth);
            }

            ShellCommand::Take { cell } => {
                if self.board.take(cell).is_none() {
                    bail!("There is no piece on {cell} to take");
                }
            }

            ShellCommand::Undo => {
                if self.board.undo_move().is_none() {
                    bail!("There are no moves to undo");
                }
            }
        }

        Ok(true)
    }

    /// Executes the `moves` command, printing the moves available to the side to move.
    fn moves(&self, cell: Option<Cell>, sort: bool, notation: bool) {
        let mut moves = if let Some(cell) = cell {
            self.board.get_moves_from(cell)
        } else {
            self.board.get_valid_moves()
        };

        if sort {
            moves.sort_by_key(|mv| (mv.from(), mv.to()));
        }

        // If there are none, print "(none)"
        let moves_string = if moves.is_empty() {
            String::from("(none)")
        } else {
            moves
                .into_iter()
                .map(|mv| {
                    if notation {
                        mv.to_notation()
                    } else {
                        mv.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!("{moves_string}");
    }

    /// Executes the `history` command, printing every applied move with its number.
    fn history(&self) {
        if self.board.history().is_empty() {
            println!("(none)");
            return;
        }

        for (i, mv) in self.board.history().iter().enumerate() {
            println!("{:>3}. {mv} ({})", i + 1, mv.to_notation());
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

/// Loops endlessly to await input via `stdin`, sending all successfully-parsed commands through the supplied `sender`.
fn input_handler(sender: Sender<ShellCommand>) -> Result<()> {
    let mut buffer = String::with_capacity(256);

    loop {
        buffer.clear();
        let bytes = io::stdin()
            .read_line(&mut buffer)
            .context("Failed to read line when parsing commands")?;

        // For ctrl + d
        if 0 == bytes {
            sender
                .send(ShellCommand::Exit)
                .context("Failed to send 'exit' command after receiving empty input")?;

            return Ok(());
        }

        let buf = buffer.trim();

        // Ignore empty lines
        if buf.is_empty() {
            continue;
        }

        match buf.parse::<ShellCommand>() {
            Ok(cmd) => sender
                .send(cmd)
                .context("Failed to send command to shell")?,

            // If an invalid command was received, just print the error and continue running
            Err(err) => eprintln!("{err}"),
        }
    }
}
