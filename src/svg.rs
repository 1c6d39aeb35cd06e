//! SVG document assembly for a glyph grid
//!
//! The markup layout is fixed: a 400 x 400 viewBox, the `Penrose` font
//! loaded from `./Penrose.ttf`, a full-size background rect and one centered
//! `<text>` line per grid row between 10% and 90% of the canvas height.

use crate::pattern::Grid;
use crate::scheme::ColorScheme;

/// Font family declared by the document.
pub const FONT_FAMILY: &str = "Penrose";

/// Relative URL of the font resource.
pub const FONT_URL: &str = "./Penrose.ttf";

/// First row position, percent of canvas height.
pub const START_PERCENT: u32 = 10;

const SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="xMinYMin meet" viewBox="0 0 400 400">"#;
const SVG_CLOSE: &str = "</svg>";

/// Vertical position of row `i` in quarter percent units.
///
/// The step is `(100 - 2 * 10) / 64 = 1.25`, so positions are exact
/// multiples of `0.25`.
fn row_position_quarters(i: usize) -> u64 {
    u64::from(START_PERCENT) * 4 + 5 * i as u64
}

/// Format the y position of row `i` without the `%` sign.
///
/// The first row prints as `10`; later rows always carry a fractional part
/// (`11.25`, `12.5`, `15.0`), which is how the deployed collection's
/// metadata spells them.
pub fn row_position(i: usize) -> String {
    let quarters = row_position_quarters(i);
    let whole = quarters / 4;
    if i == 0 {
        return whole.to_string();
    }
    let fraction = match quarters % 4 {
        0 => "0",
        1 => "25",
        2 => "5",
        _ => "75",
    };
    format!("{}.{}", whole, fraction)
}

/// Render a grid as an SVG document using the given color scheme.
pub fn render_svg(grid: &Grid, colors: ColorScheme) -> String {
    let rows = grid.rows();
    // Each text line adds ~135 bytes of markup on top of the 64 glyphs.
    let mut svg = String::with_capacity(512 + rows.len() * 135);

    svg.push_str(SVG_OPEN);
    svg.push_str(&format!(
        r#"<defs><style>@font-face{{font-family:"{font}";src:url("{url}");}}</style></defs>"#,
        font = FONT_FAMILY,
        url = FONT_URL,
    ));
    svg.push_str(&format!(
        r#"<style>.base {{ fill: #{fg}; font-family: "{font}", monospace;font-size: 5px;}}</style>"#,
        fg = colors.foreground(),
        font = FONT_FAMILY,
    ));
    svg.push_str(&format!(
        r##"<rect width="100%" height="100%" fill="#{bg}" />"##,
        bg = colors.background(),
    ));

    for (i, row) in rows.iter().enumerate() {
        svg.push_str(r#"<text x="50%" y=""#);
        svg.push_str(&row_position(i));
        svg.push_str(r#"%" class="base" text-anchor="middle">"#);
        svg.push_str(row);
        svg.push_str("</text>");
    }

    svg.push_str(SVG_CLOSE);
    svg
}
