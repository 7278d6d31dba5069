//! Horizontal bar rendering with eighth-of-a-cell resolution.
//!
//! | Glyph | Fill |
//! |-------|------|
//! | `░`   | 0/8  |
//! | `▏`   | 1/8  |
//! | `▎`   | 2/8  |
//! | `▍`   | 3/8  |
//! | `▌`   | 4/8  |
//! | `▋`   | 5/8  |
//! | `▊`   | 6/8  |
//! | `▉`   | 7/8  |
//! | `█`   | 8/8  |

/// Block glyphs ordered from empty to full.
pub const GLYPHS: [char; 9] = ['░', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

/// Number of sub-divisions per character cell.
pub const STEPS_PER_CELL: usize = 8;

const EMPTY: char = GLYPHS[0];
const FULL: char = GLYPHS[STEPS_PER_CELL];

/// Renders `percent` (0..=100) as a bar of exactly `width` glyphs.
///
/// The filled length is truncated to the nearest eighth of a cell below the
/// exact value. Negative or NaN percentages render empty; anything at or
/// above 100 renders full.
pub fn render_bar(percent: f64, width: usize) -> String {
    // `as` saturates: negatives and NaN become 0.
    let units = ((width * STEPS_PER_CELL) as f64 * percent / 100.0).floor() as usize;
    let full_cells = units / STEPS_PER_CELL;

    if full_cells >= width {
        return std::iter::repeat_n(FULL, width).collect();
    }

    let mut bar = String::with_capacity(width * FULL.len_utf8());
    bar.extend(std::iter::repeat_n(FULL, full_cells));
    bar.push(GLYPHS[units % STEPS_PER_CELL]);
    bar.extend(std::iter::repeat_n(EMPTY, width - full_cells - 1));
    bar
}

/// Fill level of a rendered bar in eighths; used to compare bars.
pub fn filled_units(bar: &str) -> usize {
    bar.chars()
        .filter_map(|c| GLYPHS.iter().position(|&g| g == c))
        .sum()
}
