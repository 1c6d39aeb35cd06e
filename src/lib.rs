//! Penrose - deterministic seed-to-SVG tile generator
//!
//! This library provides functionality to:
//! - Derive a 64x64 glyph grid from an integer seed
//! - Render the grid as an SVG tile and encode it as a `data:` URI
//! - Track minted tokens (id -> seed and schemes) in an in-memory registry
//!
//! ```
//! use penrose::registry::{MintRegistry, TokenId};
//!
//! let registry = MintRegistry::new();
//! let svg = registry.mint(12345).unwrap();
//! assert_eq!(registry.token_svg(TokenId::new(1)).unwrap(), svg);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pattern;
pub mod registry;
pub mod scheme;
pub mod seed;
pub mod svg;
pub mod uri;

pub use error::{PenroseError, Result};
pub use pattern::{compute_grid, Grid};
pub use registry::{MintRegistry, TokenId};
pub use scheme::{select_color_scheme, select_glyph_scheme, ColorScheme, GlyphScheme};
pub use seed::Seed;
pub use svg::render_svg;
pub use uri::{decode_data_uri, encode_data_uri};
