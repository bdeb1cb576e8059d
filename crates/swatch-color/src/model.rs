//! Color value types.
//!
//! Every type here is an immutable value: equality is component-wise and
//! nothing carries identity beyond its value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// A color in OKLCH.
///
/// Lightness is expressed in percent (0–100), chroma in OKLab units
/// (0–0.4 covers sRGB comfortably) and hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OklchColor {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl OklchColor {
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Hue wrapped into `[0, 360)`.
    pub fn normalized_hue(self) -> f64 {
        normalize_hue(self.h)
    }

    /// Same lightness and chroma at a different hue (wrapped).
    pub fn with_hue(self, h: f64) -> Self {
        Self {
            h: normalize_hue(h),
            ..self
        }
    }

    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    pub fn with_chroma(self, c: f64) -> Self {
        Self { c, ..self }
    }
}

/// CSS Color 4 notation, e.g. `oklch(60% 0.18 262)`.
///
/// Components are written at full precision so the text parses back to the
/// same value. A precision (`{:.4}`) rounds each component to that many
/// decimals for display.
impl fmt::Display for OklchColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (l, c, h) = match f.precision() {
            Some(places) => (
                round_to(self.l, places),
                round_to(self.c, places),
                round_to(self.h, places),
            ),
            None => (self.l, self.c, self.h),
        };
        write!(f, "oklch({l}% {c} {h})")
    }
}

impl FromStr for OklchColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_css_oklch(s)
    }
}

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({} {} {})", self.r, self.g, self.b)
    }
}

/// Hue/saturation/value as produced by visual pickers.
///
/// Hue in degrees, saturation and value in percent. Only used as an input
/// format; it is converted to OKLCH before anything is stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvColor {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl HsvColor {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// A `#rrggbb` string. Always six lowercase hex digits.
///
/// The decoded triple is kept next to the text, so every `HexColor` is a
/// parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    text: String,
    rgb: RgbColor,
}

impl HexColor {
    /// Parse and normalize a `#rrggbb` string.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let rgb = parse_hex_rgb(s)?;
        Ok(Self::from(rgb))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn to_rgb(&self) -> RgbColor {
        self.rgb
    }
}

impl From<RgbColor> for HexColor {
    fn from(rgb: RgbColor) -> Self {
        HexColor {
            text: format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b),
            rgb,
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HexColor::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.text
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexColor::parse(s)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Wrap a hue angle into `[0, 360)`.
pub(crate) fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // -1e-15 + 360.0 rounds to 360.0
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Strict `#rrggbb` parser.
pub(crate) fn parse_hex_rgb(s: &str) -> Result<RgbColor, ColorError> {
    let digits = s
        .strip_prefix('#')
        .ok_or_else(|| ColorError::invalid_format(s, "expected a leading '#'"))?;
    let bytes = digits.as_bytes();
    if bytes.len() != 6 {
        return Err(ColorError::invalid_format(
            s,
            format!("expected 6 hex digits, got {}", bytes.len()),
        ));
    }
    let byte = |i: usize| -> Result<u8, ColorError> {
        match (hex_digit(bytes[i]), hex_digit(bytes[i + 1])) {
            (Some(hi), Some(lo)) => Ok(hi << 4 | lo),
            _ => Err(ColorError::invalid_format(s, "non-hex digit")),
        }
    };
    Ok(RgbColor::new(byte(0)?, byte(2)?, byte(4)?))
}

const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn parse_css_oklch(input: &str) -> Result<OklchColor, ColorError> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    let inner = lower
        .strip_prefix("oklch(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ColorError::invalid_format(input, "expected oklch(L C H)"))?;

    // Alpha after '/' is accepted and ignored.
    let components = inner.split('/').next().unwrap_or_default();
    let parts: Vec<&str> = components
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 {
        return Err(ColorError::invalid_format(
            input,
            format!("expected 3 components, got {}", parts.len()),
        ));
    }

    let number = |token: &str, what: &str| -> Result<f64, ColorError> {
        token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ColorError::invalid_format(input, format!("invalid {what} {token:?}")))
    };

    let l = match parts[0].strip_suffix('%') {
        Some(pct) => number(pct, "lightness")?,
        None => number(parts[0], "lightness")? * 100.0,
    };
    // CSS maps 100% chroma to 0.4.
    let c = match parts[1].strip_suffix('%') {
        Some(pct) => number(pct, "chroma")? * 0.004,
        None => number(parts[1], "chroma")?,
    };
    let h = number(parts[2].strip_suffix("deg").unwrap_or(parts[2]), "hue")?;

    Ok(OklchColor::new(l, c, h))
}

fn round_to(v: f64, places: usize) -> f64 {
    let scale = 10f64.powi(places.min(15) as i32);
    (v * scale).round() / scale
}
