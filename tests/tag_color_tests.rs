use dashprune::tags::color::{palette_entry, palette_index};
use dashprune::tags::derive_color;
use dashprune::tags::palette::{hex, PALETTE_LEN, TAG_BORDER_COLORS, TAG_COLORS};

#[test]
fn same_name_same_colors() {
    for name in ["prod", "team-a", "", "ünïcödé", "a very long tag name indeed"] {
        assert_eq!(derive_color(name), derive_color(&name.to_string()));
    }
}

#[test]
fn colors_come_from_one_palette_row() {
    for name in ["alpha", "beta", "gamma", "delta", "", "42", "🚀"] {
        let pair = derive_color(name);
        let row = TAG_COLORS
            .iter()
            .position(|c| *c == pair.color)
            .expect("background is a palette color");
        assert_eq!(TAG_BORDER_COLORS[row], pair.border_color);
    }
}

#[test]
fn case_does_not_change_the_color() {
    assert_eq!(derive_color("Production"), derive_color("production"));
    assert_eq!(derive_color("OPS"), derive_color("ops"));
}

#[test]
fn empty_name_uses_the_seed_row() {
    // djb2("") = 5381, 5381 % 29 = 16
    assert_eq!(palette_index(""), 16);
    assert_eq!(derive_color(""), palette_entry(16));
}

#[test]
fn many_names_spread_over_the_palette() {
    let mut seen = vec![false; PALETTE_LEN];
    for i in 0..500 {
        seen[palette_index(&format!("tag-{i}"))] = true;
    }
    assert!(seen.iter().filter(|s| **s).count() > PALETTE_LEN / 2);
}

#[test]
fn hex_formats_palette_colors() {
    assert_eq!(hex(TAG_COLORS[0]), "#D32D20");
    assert_eq!(hex(TAG_BORDER_COLORS[0]), "#FF7368");
}
