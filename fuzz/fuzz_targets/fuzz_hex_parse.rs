//! Fuzz target for `#rrggbb` parsing.
//!
//! Parsing must never panic, and anything accepted must survive a trip
//! through RGB unchanged (modulo case).

#![no_main]

use libfuzzer_sys::fuzz_target;
use swatch_color::{hex_to_oklch, rgb_to_hex, HexColor};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(hex) = HexColor::parse(input) {
        assert_eq!(rgb_to_hex(hex.to_rgb()).as_str(), input.to_ascii_lowercase());
        let _ = hex_to_oklch(input);
    }
});
