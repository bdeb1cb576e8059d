//! Fuzz target for CSS `oklch(...)` parsing and formatting.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use swatch_color::{parse_color, validate, OklchColor};

#[derive(Arbitrary, Debug)]
enum Input<'a> {
    /// Free-form text straight into the parser.
    Text(&'a str),
    /// Components rendered with `Display` and parsed back.
    Components { l: f64, c: f64, h: f64 },
}

fuzz_target!(|input: Input| {
    match input {
        Input::Text(text) => {
            if let Ok(color) = parse_color(text) {
                let _ = validate(color);
            }
        }
        Input::Components { l, c, h } => {
            if ![l, c, h].iter().all(|v| v.is_finite() && v.abs() < 1e9) {
                return;
            }
            let css = OklchColor::new(l, c, h).to_string();
            let parsed: OklchColor = css.parse().expect("Display output must parse");
            // Display rounds to 4 decimals
            assert!((parsed.l - l).abs() <= 1e-4, "{css}");
            assert!((parsed.c - c).abs() <= 1e-4, "{css}");
            assert!((parsed.h - h).abs() <= 1e-4, "{css}");
        }
    }
});
