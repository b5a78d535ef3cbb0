use ratatui::style::Color;

/// Number of rows in the tag palette.
pub const PALETTE_LEN: usize = 29;

/// Background colors, index-aligned with [`TAG_BORDER_COLORS`].
pub const TAG_COLORS: [Color; PALETTE_LEN] = [
    Color::Rgb(0xD3, 0x2D, 0x20),
    Color::Rgb(0x1E, 0x72, 0xB8),
    Color::Rgb(0xB2, 0x40, 0xA2),
    Color::Rgb(0x70, 0x5D, 0xA0),
    Color::Rgb(0x46, 0x68, 0x03),
    Color::Rgb(0x49, 0x7A, 0x3C),
    Color::Rgb(0x3D, 0x71, 0xAA),
    Color::Rgb(0xB1, 0x54, 0x15),
    Color::Rgb(0x89, 0x0F, 0x02),
    Color::Rgb(0x6E, 0x6E, 0x6E),
    Color::Rgb(0x0A, 0x43, 0x7C),
    Color::Rgb(0x6D, 0x1F, 0x62),
    Color::Rgb(0x58, 0x44, 0x77),
    Color::Rgb(0x4C, 0x7A, 0x3F),
    Color::Rgb(0x2F, 0x4F, 0x4F),
    Color::Rgb(0xBF, 0x1B, 0x00),
    Color::Rgb(0x76, 0x62, 0xB1),
    Color::Rgb(0x8A, 0x2E, 0xB8),
    Color::Rgb(0x51, 0x7A, 0x00),
    Color::Rgb(0x00, 0x00, 0x00),
    Color::Rgb(0x3F, 0x68, 0x33),
    Color::Rgb(0x2F, 0x57, 0x5E),
    Color::Rgb(0x99, 0x44, 0x0A),
    Color::Rgb(0xAE, 0x56, 0x1A),
    Color::Rgb(0x0E, 0x4A, 0xB4),
    Color::Rgb(0x58, 0x14, 0x0C),
    Color::Rgb(0x05, 0x2B, 0x51),
    Color::Rgb(0x51, 0x17, 0x49),
    Color::Rgb(0x3F, 0x2B, 0x5B),
];

/// Border colors: a lighter shade of the background in the same row.
pub const TAG_BORDER_COLORS: [Color; PALETTE_LEN] = [
    Color::Rgb(0xFF, 0x73, 0x68),
    Color::Rgb(0x45, 0x9E, 0xE7),
    Color::Rgb(0xE0, 0x69, 0xCF),
    Color::Rgb(0x96, 0x83, 0xC6),
    Color::Rgb(0x6C, 0x8E, 0x29),
    Color::Rgb(0x76, 0xAC, 0x68),
    Color::Rgb(0x6A, 0xA4, 0xE2),
    Color::Rgb(0xE7, 0x82, 0x3F),
    Color::Rgb(0xAF, 0x35, 0x28),
    Color::Rgb(0x9B, 0x9B, 0x9B),
    Color::Rgb(0x30, 0x69, 0xA2),
    Color::Rgb(0x93, 0x45, 0x88),
    Color::Rgb(0x7E, 0x6A, 0x9D),
    Color::Rgb(0x88, 0xC4, 0x77),
    Color::Rgb(0x55, 0x75, 0x75),
    Color::Rgb(0xE5, 0x41, 0x26),
    Color::Rgb(0xA6, 0x94, 0xDD),
    Color::Rgb(0xB0, 0x54, 0xDE),
    Color::Rgb(0x8F, 0xC4, 0x26),
    Color::Rgb(0x26, 0x26, 0x26),
    Color::Rgb(0x65, 0x8E, 0x59),
    Color::Rgb(0x55, 0x7D, 0x84),
    Color::Rgb(0xBF, 0x6A, 0x30),
    Color::Rgb(0xFF, 0x9B, 0x53),
    Color::Rgb(0x34, 0x70, 0xDA),
    Color::Rgb(0x7E, 0x3A, 0x32),
    Color::Rgb(0x2B, 0x51, 0x77),
    Color::Rgb(0x77, 0x3D, 0x6F),
    Color::Rgb(0x65, 0x51, 0x81),
];

/// Formats an RGB palette color as `#RRGGBB`. Named colors fall back to
/// their debug name.
pub fn hex(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{r:02X}{g:02X}{b:02X}"),
        other => format!("{other:?}"),
    }
}
