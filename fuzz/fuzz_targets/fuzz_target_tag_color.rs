#![no_main]
use dashprune::tags::palette::TAG_COLORS;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|name: &str| {
    // Any name maps to a palette row, the same one every time
    let pair = dashprune::tags::derive_color(name);
    assert!(TAG_COLORS.contains(&pair.color));
    assert_eq!(pair, dashprune::tags::derive_color(name));
});
