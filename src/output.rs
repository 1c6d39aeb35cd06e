//! Token output formatting and file path generation

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::OutputFormat;
use crate::error::PenroseError;
use crate::registry::{MintRegistry, Minted, TokenId, TokenRecord};
use crate::uri::encode_data_uri;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Registry lookup failed
    #[error("{0}")]
    Token(#[from] PenroseError),
}

/// Render a freshly minted token in the requested format.
///
/// The markup carried by `minted` is reused; only `raw` and `json` consult
/// the registry for the stored parameters.
///
/// | Format | Content |
/// |--------|---------|
/// | `svg`  | SVG markup |
/// | `uri`  | `data:image/svg+xml;base64,...` |
/// | `raw`  | 64 grid rows joined by newlines |
/// | `json` | pretty-printed token record |
pub fn format_token(
    registry: &MintRegistry,
    minted: &Minted,
    format: OutputFormat,
) -> Result<String, OutputError> {
    let text = match format {
        OutputFormat::Svg => minted.svg.clone(),
        OutputFormat::Uri => encode_data_uri(&minted.svg),
        OutputFormat::Raw => registry.token_raw_uri(minted.id)?.join("\n"),
        OutputFormat::Json => {
            let record = TokenRecord::new(minted.id, registry.params(minted.id)?, &minted.svg);
            serde_json::to_string_pretty(&record)?
        }
    };
    Ok(text)
}

/// Generate the output path for a token: `{dir}/{id}.{ext}`.
pub fn generate_output_path(dir: &Path, id: TokenId, format: OutputFormat) -> PathBuf {
    dir.join(format!("{}.{}", id, format.extension()))
}

/// Write token output to a file, creating parent directories as needed.
pub fn save_output(contents: &str, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;
    use crate::uri::decode_data_uri;
    use tempfile::TempDir;

    #[test]
    fn test_generate_output_path() {
        let dir = Path::new("tiles");
        assert_eq!(
            generate_output_path(dir, TokenId::new(1), OutputFormat::Svg),
            PathBuf::from("tiles/1.svg")
        );
        assert_eq!(
            generate_output_path(dir, TokenId::new(12), OutputFormat::Uri),
            PathBuf::from("tiles/12.txt")
        );
        assert_eq!(
            generate_output_path(dir, TokenId::new(3), OutputFormat::Json),
            PathBuf::from("tiles/3.json")
        );
    }

    #[test]
    fn test_format_token_variants() {
        let registry = MintRegistry::new();
        let minted = registry.mint_token(Seed::new(424242).unwrap());

        let svg = format_token(&registry, &minted, OutputFormat::Svg).unwrap();
        assert!(svg.starts_with("<svg "));
        assert_eq!(svg, registry.token_svg(minted.id).unwrap());

        let uri = format_token(&registry, &minted, OutputFormat::Uri).unwrap();
        assert_eq!(uri, registry.token_uri(minted.id).unwrap());

        let raw = format_token(&registry, &minted, OutputFormat::Raw).unwrap();
        assert_eq!(raw.lines().count(), 64);
        assert!(raw.starts_with("XXXXXXXXXXXX"));

        let json = format_token(&registry, &minted, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], "1");
        assert_eq!(value["seed"], 424242);
        assert_eq!(value["image"], registry.token_uri(minted.id).unwrap());
    }

    #[test]
    fn test_format_token_reuses_minted_markup() {
        let registry = MintRegistry::new();
        let minted = registry.mint_token(Seed::new(12345).unwrap());
        let stand_in = Minted {
            id: minted.id,
            svg: "<svg/>".to_string(),
        };

        assert_eq!(format_token(&registry, &stand_in, OutputFormat::Svg).unwrap(), "<svg/>");
        let uri = format_token(&registry, &stand_in, OutputFormat::Uri).unwrap();
        assert_eq!(decode_data_uri(&uri).unwrap(), "<svg/>");
        let json = format_token(&registry, &stand_in, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["image"], uri);
    }

    #[test]
    fn test_format_token_unknown_id() {
        let registry = MintRegistry::new();
        let minted = Minted {
            id: TokenId::new(5),
            svg: String::new(),
        };
        let result = format_token(&registry, &minted, OutputFormat::Raw);
        assert!(matches!(result, Err(OutputError::Token(PenroseError::NotFound(_)))));
    }

    #[test]
    fn test_save_output_creates_parent_dirs() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = temp.path().join("nested").join("dir").join("1.svg");

        save_output("<svg/>", &path).expect("should save output");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
    }
}
