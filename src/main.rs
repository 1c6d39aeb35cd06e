//! Penrose - command-line tool for minting and previewing seed tiles

use std::process::ExitCode;

use penrose::cli;

fn main() -> ExitCode {
    cli::run()
}
