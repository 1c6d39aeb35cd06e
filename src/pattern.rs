//! Seed to glyph grid derivation
//!
//! Every cell is an independent fixed-point evaluation of `x * y / ONE`
//! where `x` and `y` are odd offsets from the grid center scaled by the
//! seed. The integer part is reduced by a seed-dependent modulus and the
//! result picks a glyph from the token's scheme.
//!
//! All arithmetic is exact `i128`. Division floors toward negative
//! infinity and the reduction is a Euclidean remainder, matching the
//! deployed collection for every seed small enough that its float
//! evaluation was exact (`|63 * seed|^2 < 2^53`).

use rayon::prelude::*;
use serde::Serialize;

use crate::scheme::GlyphScheme;
use crate::seed::Seed;

/// Grid width and height.
pub const GRID_SIZE: usize = 64;

/// Half the grid size, the center offset.
pub const HALF_SIZE: i64 = (GRID_SIZE / 2) as i64;

/// Fixed-point scale, `16^8`.
pub const ONE: i128 = 1 << 32;

/// Glyph used for cell values outside the scheme alphabet.
pub const FILLER: char = '.';

/// A 64 x 64 glyph grid, one string per row, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<String>,
}

impl Grid {
    /// Rows from top to bottom, each exactly 64 glyphs.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Consume the grid and return its rows.
    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }

    /// Glyph at `(row, col)`, or `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row)?.chars().nth(col)
    }
}

/// Reduction modulus for a seed, always in `[5, 15]`.
pub fn modulus(seed: Seed) -> i64 {
    seed.bucket(11) + 5
}

/// Odd center offset `2 * (k - H) + 1` for index `k`, in `[-63, 63]`.
fn axis_offset(k: usize) -> i64 {
    2 * (k as i64 - HALF_SIZE) + 1
}

/// Row factor `y` for row `i`, already scaled by the seed.
fn row_factor(seed: Seed, i: usize) -> i128 {
    let offset = axis_offset(i);
    let y = match seed.bucket(3) {
        1 => -offset,
        2 => offset.abs(),
        _ => offset,
    };
    i128::from(y) * i128::from(seed.value())
}

/// Column factor `x` for column `j`, already scaled by the seed.
fn column_factor(seed: Seed, j: usize) -> i128 {
    let offset = axis_offset(j);
    let x = if seed.is_odd() { offset.abs() } else { offset };
    i128::from(x) * i128::from(seed.value())
}

/// Raw cell value `floor(x * y / ONE) mod modulus`, in `[0, modulus)`.
pub fn cell_value(seed: Seed, row: usize, col: usize) -> i64 {
    raw_value(row_factor(seed, row), column_factor(seed, col), modulus(seed))
}

fn raw_value(y: i128, x: i128, modulus: i64) -> i64 {
    let scaled = (x * y).div_euclid(ONE);
    // rem_euclid result is < modulus <= 15
    scaled.rem_euclid(i128::from(modulus)) as i64
}

fn glyph_for(scheme: GlyphScheme, value: i64) -> char {
    usize::try_from(value)
        .ok()
        .and_then(|v| scheme.glyph(v))
        .unwrap_or(FILLER)
}

/// Derive the full grid for a seed and glyph scheme.
///
/// Rows are evaluated in parallel and collected in order, so the result is
/// identical to a sequential top-to-bottom, left-to-right pass.
pub fn compute_grid(seed: Seed, scheme: GlyphScheme) -> Grid {
    let modulus = modulus(seed);
    let columns: Vec<i128> = (0..GRID_SIZE).map(|j| column_factor(seed, j)).collect();

    let rows = (0..GRID_SIZE)
        .into_par_iter()
        .map(|i| {
            let y = row_factor(seed, i);
            columns
                .iter()
                .map(|&x| glyph_for(scheme, raw_value(y, x, modulus)))
                .collect::<String>()
        })
        .collect();

    Grid { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::select_glyph_scheme;

    fn seed(v: i64) -> Seed {
        Seed::new(v).unwrap()
    }

    #[test]
    fn test_grid_dimensions() {
        let s = seed(12345);
        let grid = compute_grid(s, select_glyph_scheme(s));
        assert_eq!(grid.rows().len(), GRID_SIZE);
        for row in grid.rows() {
            assert_eq!(row.chars().count(), GRID_SIZE);
        }
    }

    #[test]
    fn test_golden_cell_seed_12345() {
        // 12345 mod 3 = 0 (y unchanged), 12345 is odd (x = |x|), modulus = 3 + 5
        let s = seed(12345);
        assert_eq!(modulus(s), 8);
        assert_eq!(row_factor(s, 0), -63 * 12345);
        assert_eq!(column_factor(s, 0), 63 * 12345);
        // -604871730225 / 2^32 floors to -141, and -141 mod 8 = 3
        assert_eq!((-604_871_730_225_i128).div_euclid(ONE), -141);
        assert_eq!(cell_value(s, 0, 0), 3);

        let grid = compute_grid(s, GlyphScheme::C);
        assert_eq!(grid.cell(0, 0), Some('\\'));
    }

    #[test]
    fn test_golden_rows_seed_12345() {
        let s = seed(12345);
        let grid = compute_grid(s, select_glyph_scheme(s));
        assert_eq!(
            grid.rows()[0],
            "\\......-.\\......-.\\......-.\\........\\.-......\\.-......\\.-......\\"
        );
        assert_eq!(
            grid.rows()[1],
            ".\\......-.-.\\........-.\\.\\............\\.\\.-........\\.-.-......\\."
        );
        assert_eq!(
            grid.rows()[63],
            "..\\.-.-....\\.-......\\.-......\\.--.\\......-.\\......-.\\....-.-.\\.."
        );
    }

    #[test]
    fn test_golden_rows_negative_seed() {
        // -98765: mod 3 = 1 (y negated), odd, modulus 9, scheme A
        let s = seed(-98765);
        let grid = compute_grid(s, select_glyph_scheme(s));
        assert_eq!(
            grid.rows()[0],
            "....-....-...+-...+/...+/...+/..../+.../+.../+...-+...-....-...."
        );
        assert_eq!(
            grid.rows()[63],
            "-....-....-....-.../-.../+.../+..+/...+/...-/...-....-....-....-"
        );
    }

    #[test]
    fn test_golden_rows_even_seed_keeps_signed_columns() {
        // 424242: mod 3 = 0 (y unchanged), even (x keeps its sign), modulus 10, scheme B
        let s = seed(424242);
        let grid = compute_grid(s, select_glyph_scheme(s));
        assert_eq!(
            grid.rows()[0],
            "XXXXXXXXXXXX...................................................."
        );
        assert_eq!(
            grid.rows()[1],
            "X...X.../.../.../.../...\\...\\X..\\X...X...X.../.../.../...\\...\\.."
        );
    }

    #[test]
    fn test_golden_rows_folded_rows() {
        // 12347: mod 3 = 2 (y = |y|), odd (x = |x|), modulus 10, scheme C
        let s = seed(12347);
        assert_eq!(row_factor(s, 0), 63 * 12347);
        assert_eq!(row_factor(s, 63), 63 * 12347);
        let grid = compute_grid(s, select_glyph_scheme(s));
        assert_eq!(
            grid.rows()[0],
            "....-........-.\\......-.\\......--......\\.-......\\.-........-...."
        );
        assert_eq!(
            grid.rows()[1],
            ".-.\\......\\......-......-.\\....--....\\.-......-......\\......\\.-."
        );
        assert_eq!(
            grid.rows()[31],
            "----........................................................----"
        );
    }

    #[test]
    fn test_golden_rows_folded_rows_even_seed() {
        // 12350: mod 3 = 2 (y = |y|), even (x keeps its sign), modulus 13, scheme C
        let s = seed(12350);
        let grid = compute_grid(s, select_glyph_scheme(s));
        assert_eq!(
            grid.rows()[0],
            "-..-..-..\\..\\...................-..-..\\..\\..\\..................."
        );
        assert_eq!(
            grid.rows()[1],
            "..-..-..-..-..-..-..-..-..-..-..-..-..-..-..-..-..-..-..-..-..-."
        );
        assert_eq!(
            grid.rows()[32],
            "............................................................----"
        );
    }

    #[test]
    fn test_folded_rows_mirror_vertically() {
        for value in [12347, 12350, 98765, -98764] {
            let s = seed(value);
            assert_eq!(s.bucket(3), 2, "seed {}", value);
            let grid = compute_grid(s, select_glyph_scheme(s));
            for i in 0..GRID_SIZE / 2 {
                assert_eq!(grid.rows()[i], grid.rows()[GRID_SIZE - 1 - i], "seed {} row {}", value, i);
            }
        }
    }

    #[test]
    fn test_golden_rows_scheme_d_and_e() {
        let d = seed(415075);
        let grid = compute_grid(d, select_glyph_scheme(d));
        assert_eq!(
            grid.rows()[0],
            "..\\.|../.|\\./.|\\./..\\.|../.|\\./../.\\|./..|.\\../.\\|./.\\|./..|.\\.."
        );
        assert_eq!(
            grid.rows()[32],
            "|./../.\\|./../.\\|.\\../.\\|.\\|./..../.|\\.|\\./..\\.|\\./../.|\\./../.|"
        );

        let e = seed(415081);
        let grid = compute_grid(e, select_glyph_scheme(e));
        assert_eq!(
            grid.rows()[0],
            ".........O....O..................................O....O........."
        );
        assert_eq!(
            grid.rows()[32],
            "....O...............O......................O...............O...."
        );
    }

    #[test]
    fn test_small_seeds_are_all_filler() {
        for value in [0, 1, 2, 3] {
            let s = seed(value);
            let grid = compute_grid(s, select_glyph_scheme(s));
            assert!(grid.rows().iter().all(|row| row.chars().all(|c| c == '.')));
        }
    }

    #[test]
    fn test_compute_grid_is_deterministic() {
        for value in [7, 12345, -98765, 1_000_003, 424242] {
            let s = seed(value);
            let scheme = select_glyph_scheme(s);
            assert_eq!(compute_grid(s, scheme), compute_grid(s, scheme));
        }
    }

    #[test]
    fn test_cell_values_within_modulus() {
        for value in [5, 16, 12345, -98765, 777777, 1_000_003] {
            let s = seed(value);
            let m = modulus(s);
            assert!((5..=15).contains(&m));
            for row in (0..GRID_SIZE).step_by(7) {
                for col in (0..GRID_SIZE).step_by(5) {
                    let v = cell_value(s, row, col);
                    assert!(v >= 0 && v < m, "seed {} cell ({}, {}) = {}", value, row, col, v);
                }
            }
        }
    }

    #[test]
    fn test_extreme_seed_does_not_overflow() {
        let s = seed(crate::seed::MAX_SEED_MAGNITUDE);
        let grid = compute_grid(s, select_glyph_scheme(s));
        assert_eq!(grid.rows().len(), GRID_SIZE);

        let s = seed(-crate::seed::MAX_SEED_MAGNITUDE);
        let grid = compute_grid(s, select_glyph_scheme(s));
        assert_eq!(grid.rows().len(), GRID_SIZE);
    }
}
