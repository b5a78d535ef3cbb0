use ratatui::style::Color;

use super::palette::{PALETTE_LEN, TAG_BORDER_COLORS, TAG_COLORS};

/// Background and border colors for one tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColorPair {
    pub color: Color,
    pub border_color: Color,
}

/// Picks the palette row for a tag name.
///
/// Tags are compared case-insensitively, so `Prod` and `prod` share a color.
/// The result depends on nothing but the name: no per-process hasher seed is
/// involved, so colors are stable across runs and machines.
pub fn derive_color(name: &str) -> ColorPair {
    palette_entry(palette_index(name))
}

pub fn palette_index(name: &str) -> usize {
    let hash = djb2(&name.to_lowercase());
    (hash % PALETTE_LEN as i32).unsigned_abs() as usize
}

pub fn palette_entry(index: usize) -> ColorPair {
    let i = index % PALETTE_LEN;
    ColorPair {
        color: TAG_COLORS[i],
        border_color: TAG_BORDER_COLORS[i],
    }
}

// 32-bit djb2 over UTF-16 code units.
fn djb2(s: &str) -> i32 {
    s.encode_utf16()
        .fold(5381i32, |h, unit| {
            h.wrapping_shl(5).wrapping_add(h).wrapping_add(unit as i32)
        })
}
