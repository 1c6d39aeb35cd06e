//! Mint registry for tokens
//!
//! The registry assigns sequential token ids and remembers, per id, the seed
//! and the glyph and color schemes chosen at mint time. Queries re-derive the
//! grid and markup from those stored parameters, so they always reproduce the
//! bytes `mint` returned.
//!
//! All state sits behind one `RwLock`. A mint holds the write lock while it
//! allocates the id and writes the four mappings, so readers never see half
//! of an entry and concurrent mints never share an id.

use std::collections::HashMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::error::{PenroseError, Result};
use crate::pattern::{compute_grid, Grid};
use crate::scheme::{select_color_scheme, select_glyph_scheme, ColorScheme, GlyphScheme};
use crate::seed::Seed;
use crate::svg::render_svg;
use crate::uri::encode_data_uri;

/// Sequential token identifier, starting at 1.
///
/// Displays and parses as its decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(u64);

impl TokenId {
    /// Wrap a raw id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TokenId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u64> for TokenId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Serialize for TokenId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parameters fixed for a token at mint time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParams {
    pub seed: Seed,
    pub scheme: GlyphScheme,
    pub color_scheme: ColorScheme,
}

impl TokenParams {
    /// Derive both schemes from a seed.
    pub fn from_seed(seed: Seed) -> Self {
        Self {
            seed,
            scheme: select_glyph_scheme(seed),
            color_scheme: select_color_scheme(seed),
        }
    }

    /// The token's glyph grid.
    pub fn grid(&self) -> Grid {
        compute_grid(self.seed, self.scheme)
    }

    /// The token's SVG markup.
    pub fn svg(&self) -> String {
        render_svg(&self.grid(), self.color_scheme)
    }

    /// The token's SVG markup as a data URI.
    pub fn data_uri(&self) -> String {
        encode_data_uri(&self.svg())
    }
}

/// Result of a mint: the new id and the rendered markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minted {
    pub id: TokenId,
    pub svg: String,
}

/// Serializable snapshot of one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    pub id: TokenId,
    pub seed: Seed,
    pub scheme: GlyphScheme,
    pub color_scheme: ColorScheme,
    /// `data:image/svg+xml;base64,...`
    pub image: String,
}

impl TokenRecord {
    /// Build a record from stored parameters and already rendered markup.
    pub fn new(id: TokenId, params: TokenParams, svg: &str) -> Self {
        Self {
            id,
            seed: params.seed,
            scheme: params.scheme,
            color_scheme: params.color_scheme,
            image: encode_data_uri(svg),
        }
    }
}

#[derive(Debug)]
struct RegistryState {
    next_id: u64,
    id_to_seed: HashMap<TokenId, Seed>,
    // Keyed by the seed's canonical decimal string.
    seed_to_id: HashMap<String, TokenId>,
    id_to_scheme: HashMap<TokenId, GlyphScheme>,
    id_to_color_scheme: HashMap<TokenId, ColorScheme>,
}

impl Default for RegistryState {
    fn default() -> Self {
        Self {
            next_id: 1,
            id_to_seed: HashMap::new(),
            seed_to_id: HashMap::new(),
            id_to_scheme: HashMap::new(),
            id_to_color_scheme: HashMap::new(),
        }
    }
}

impl RegistryState {
    fn params(&self, id: TokenId) -> Option<TokenParams> {
        Some(TokenParams {
            seed: *self.id_to_seed.get(&id)?,
            scheme: *self.id_to_scheme.get(&id)?,
            color_scheme: *self.id_to_color_scheme.get(&id)?,
        })
    }
}

/// In-memory registry of minted tokens.
#[derive(Debug, Default)]
pub struct MintRegistry {
    state: RwLock<RegistryState>,
}

impl MintRegistry {
    /// Create an empty registry; the first mint gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(|poisoned| {
            warn!("mint registry lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(|poisoned| {
            warn!("mint registry lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Mint a token for `seed` and return its SVG markup.
    ///
    /// Duplicate seeds are accepted and get a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`PenroseError::InvalidSeed`] if `|seed| > 2^57`.
    pub fn mint(&self, seed: i64) -> Result<String> {
        Ok(self.mint_token(Seed::new(seed)?).svg)
    }

    /// Mint a token for a decimal seed string and return its SVG markup.
    ///
    /// # Errors
    ///
    /// Returns [`PenroseError::InvalidSeed`] if the text is not a decimal
    /// integer in the seed domain.
    pub fn mint_str(&self, seed: &str) -> Result<String> {
        Ok(self.mint_token(seed.parse()?).svg)
    }

    /// Mint a token for a validated seed, returning the id and SVG markup.
    pub fn mint_token(&self, seed: Seed) -> Minted {
        let params = TokenParams::from_seed(seed);

        let id = {
            let mut state = self.write();
            let id = TokenId(state.next_id);
            state.next_id += 1;
            state.id_to_seed.insert(id, seed);
            state.seed_to_id.insert(seed.key(), id);
            state.id_to_scheme.insert(id, params.scheme);
            state.id_to_color_scheme.insert(id, params.color_scheme);
            id
        };

        debug!(
            id = %id,
            seed = %seed,
            scheme = params.scheme.label(),
            colors = params.color_scheme.hex(),
            "minted token"
        );

        Minted {
            id,
            svg: params.svg(),
        }
    }

    /// Stored parameters for a token.
    ///
    /// # Errors
    ///
    /// Returns [`PenroseError::NotFound`] if `id` was never minted.
    pub fn params(&self, id: TokenId) -> Result<TokenParams> {
        self.read().params(id).ok_or(PenroseError::NotFound(id))
    }

    /// The token's SVG as a base64 data URI.
    pub fn token_uri(&self, id: TokenId) -> Result<String> {
        Ok(self.params(id)?.data_uri())
    }

    /// The token's SVG markup.
    pub fn token_svg(&self, id: TokenId) -> Result<String> {
        Ok(self.params(id)?.svg())
    }

    /// The token's raw grid: 64 rows of 64 glyphs.
    pub fn token_raw_uri(&self, id: TokenId) -> Result<Vec<String>> {
        Ok(self.params(id)?.grid().into_rows())
    }

    /// The glyph scheme stored for the token.
    pub fn scheme(&self, id: TokenId) -> Result<GlyphScheme> {
        Ok(self.params(id)?.scheme)
    }

    /// The color scheme stored for the token.
    pub fn color_scheme(&self, id: TokenId) -> Result<ColorScheme> {
        Ok(self.params(id)?.color_scheme)
    }

    /// The seed the token was minted with.
    pub fn seed_of(&self, id: TokenId) -> Result<Seed> {
        Ok(self.params(id)?.seed)
    }

    /// The most recent token minted for a seed.
    ///
    /// Lookup is by canonical decimal string, so `"007"` and `"7"` match.
    pub fn id_for_seed(&self, seed: &str) -> Option<TokenId> {
        let key = seed.parse::<Seed>().ok()?.key();
        self.read().seed_to_id.get(&key).copied()
    }

    /// Number of tokens minted so far.
    pub fn token_count(&self) -> u64 {
        self.read().next_id - 1
    }

    /// Serializable snapshot of a token, including its data URI.
    pub fn record(&self, id: TokenId) -> Result<TokenRecord> {
        let params = self.params(id)?;
        Ok(TokenRecord::new(id, params, &params.svg()))
    }
}
