//! Info command: derived parameters for a seed

use std::process::ExitCode;

use serde::Serialize;

use crate::pattern::modulus;
use crate::scheme::{select_color_scheme, select_glyph_scheme, ColorScheme, GlyphScheme};
use crate::seed::Seed;

use super::{parse_seed_arg, EXIT_ERROR, EXIT_SUCCESS};

/// Everything a seed determines before any grid is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedInfo {
    pub seed: Seed,
    pub scheme_label: &'static str,
    pub scheme: GlyphScheme,
    pub color_scheme: ColorScheme,
    pub foreground: &'static str,
    pub background: &'static str,
    pub modulus: i64,
}

impl SeedInfo {
    pub fn for_seed(seed: Seed) -> Self {
        let scheme = select_glyph_scheme(seed);
        let color_scheme = select_color_scheme(seed);
        Self {
            seed,
            scheme_label: scheme.label(),
            scheme,
            color_scheme,
            foreground: color_scheme.foreground(),
            background: color_scheme.background(),
            modulus: modulus(seed),
        }
    }
}

/// Execute the info command
pub fn run_info(seed_arg: &str, json: bool) -> ExitCode {
    let seed = match parse_seed_arg(seed_arg) {
        Ok(seed) => seed,
        Err(code) => return code,
    };

    let info = SeedInfo::for_seed(seed);

    if json {
        match serde_json::to_string_pretty(&info) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        println!("seed:         {}", info.seed);
        println!("scheme:       {} ({})", info.scheme_label, info.scheme);
        println!(
            "color scheme: {} (fg #{}, bg #{})",
            info.color_scheme, info.foreground, info.background
        );
        println!("modulus:      {}", info.modulus);
    }

    ExitCode::from(EXIT_SUCCESS)
}
