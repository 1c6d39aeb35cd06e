//! Show command: terminal preview of a seed's grid

use std::process::ExitCode;

use crate::pattern::compute_grid;
use crate::scheme::select_glyph_scheme;

use super::{parse_seed_arg, EXIT_SUCCESS};

/// Execute the show command
pub fn run_show(seed_arg: &str) -> ExitCode {
    let seed = match parse_seed_arg(seed_arg) {
        Ok(seed) => seed,
        Err(code) => return code,
    };

    let grid = compute_grid(seed, select_glyph_scheme(seed));
    for row in grid.rows() {
        println!("{}", row);
    }

    ExitCode::from(EXIT_SUCCESS)
}
