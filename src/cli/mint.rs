//! Mint command implementation

use std::process::ExitCode;

use tracing::info;

use crate::config::OutputConfig;
use crate::output::{format_token, generate_output_path, save_output};
use crate::registry::MintRegistry;
use crate::seed::Seed;

use super::{parse_seed_arg, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the mint command
///
/// All seeds are validated before anything is minted, so a bad argument
/// produces no partial output.
pub fn run_mint(seed_args: &[String], output: &OutputConfig) -> ExitCode {
    let mut seeds: Vec<Seed> = Vec::with_capacity(seed_args.len());
    for arg in seed_args {
        match parse_seed_arg(arg) {
            Ok(seed) => seeds.push(seed),
            Err(code) => return code,
        }
    }

    let registry = MintRegistry::new();

    for seed in seeds {
        let minted = registry.mint_token(seed);

        let text = match format_token(&registry, &minted, output.format) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error: token {}: {}", minted.id, e);
                return ExitCode::from(EXIT_ERROR);
            }
        };

        match &output.dir {
            Some(dir) => {
                let path = generate_output_path(dir, minted.id, output.format);
                if let Err(e) = save_output(&text, &path) {
                    eprintln!("Error: Failed to write '{}': {}", path.display(), e);
                    return ExitCode::from(EXIT_ERROR);
                }
                info!(id = %minted.id, path = %path.display(), "wrote token");
                println!("Saved: {}", path.display());
            }
            None => println!("{}", text),
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
