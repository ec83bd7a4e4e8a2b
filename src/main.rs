/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use circular_chess::{Shell, ShellCommand};
use clap::{error::ErrorKind, Parser};

fn main() {
    let mut shell = Shell::new();

    // Skip the executable name
    let args = std::env::args().skip(1).collect::<Vec<_>>();

    // Greedily parse the longest prefix of the remaining arguments as a command, queueing each one.
    let mut arg_idx = args.len();
    let mut parsed_idx = 0;
    while parsed_idx < arg_idx {
        let slice = &args[parsed_idx..arg_idx];

        match ShellCommand::try_parse_from(slice) {
            Ok(cmd) => {
                if let Err(e) = shell.send_command(cmd) {
                    eprintln!("{e}");
                }
                parsed_idx = arg_idx;
                arg_idx = args.len();
            }

            // Edge case: `--help` and `--version` are both "error" cases according to Clap
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                println!("{e}");
                parsed_idx = arg_idx;
                arg_idx = args.len();
            }

            // Nothing parses from this starting point; skip the offending argument
            Err(e) if arg_idx == parsed_idx + 1 => {
                eprintln!("Ignoring argument {:?}:\n{e}", args[parsed_idx]);
                parsed_idx += 1;
                arg_idx = args.len();
            }

            Err(_) => arg_idx -= 1,
        }
    }

    if let Err(e) = shell.run() {
        eprintln!("{} encountered an error: {e}", env!("CARGO_PKG_NAME"));
    }
}
