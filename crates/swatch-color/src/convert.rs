//! Color space conversion.
//!
//! OKLCH ↔ OKLab ↔ linear sRGB ↔ sRGB ↔ hex/HSV. The OKLab matrices are
//! Björn Ottosson's published values. Conversions from OKLCH into 8-bit
//! sRGB clamp each channel after gamma encoding, so out-of-gamut requests
//! land on the nearest representable channel value (hue may drift slightly
//! at extreme chroma).

use crate::error::ColorError;
use crate::model::{normalize_hue, parse_hex_rgb, HexColor, HsvColor, OklchColor, RgbColor};

/// Chroma below this is treated as achromatic (hue reported as 0).
const ACHROMATIC_EPSILON: f64 = 1e-6;

/// OKLCH → 8-bit sRGB with per-channel gamut clamping.
pub fn oklch_to_rgb(color: OklchColor) -> RgbColor {
    let (r, g, b) = oklch_to_srgb_unclamped(color);
    RgbColor::new(to_u8(r), to_u8(g), to_u8(b))
}

/// OKLCH → `#rrggbb`.
pub fn oklch_to_hex(color: OklchColor) -> HexColor {
    rgb_to_hex(oklch_to_rgb(color))
}

/// Alias of [`oklch_to_rgb`].
pub fn to_rgb(color: OklchColor) -> RgbColor {
    oklch_to_rgb(color)
}

/// Alias of [`oklch_to_hex`].
pub fn to_hex(color: OklchColor) -> HexColor {
    oklch_to_hex(color)
}

/// 8-bit sRGB → `#rrggbb` (lowercase, zero padded).
pub fn rgb_to_hex(rgb: RgbColor) -> HexColor {
    HexColor::from(rgb)
}

/// `#rrggbb` → 8-bit sRGB.
///
/// Fails with [`ColorError::InvalidFormat`] unless the input is `#` followed
/// by exactly six hex digits.
pub fn hex_to_rgb(hex: &str) -> Result<RgbColor, ColorError> {
    parse_hex_rgb(hex)
}

/// `#rrggbb` → OKLCH.
pub fn hex_to_oklch(hex: &str) -> Result<OklchColor, ColorError> {
    hex_to_rgb(hex).map(rgb_to_oklch)
}

/// 8-bit sRGB → OKLCH (lightness in percent, hue in `[0, 360)`).
pub fn rgb_to_oklch(rgb: RgbColor) -> OklchColor {
    let lr = srgb_to_linear(f64::from(rgb.r) / 255.0);
    let lg = srgb_to_linear(f64::from(rgb.g) / 255.0);
    let lb = srgb_to_linear(f64::from(rgb.b) / 255.0);
    let (l, a, b) = linear_srgb_to_oklab(lr, lg, lb);

    let c = a.hypot(b);
    let h = if c < ACHROMATIC_EPSILON {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    let c = if c < ACHROMATIC_EPSILON { 0.0 } else { c };
    OklchColor::new(l * 100.0, c, h)
}

/// HSV (degrees, percent, percent) → 8-bit sRGB.
pub fn hsv_to_rgb(hsv: HsvColor) -> RgbColor {
    let h = normalize_hue(hsv.h);
    let s = (hsv.s / 100.0).clamp(0.0, 1.0);
    let v = (hsv.v / 100.0).clamp(0.0, 1.0);

    let chroma = v * s;
    let sector = h / 60.0;
    let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());
    let m = v - chroma;

    let (r, g, b) = match sector.floor() as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    RgbColor::new(to_u8(r + m), to_u8(g + m), to_u8(b + m))
}

/// 8-bit sRGB → HSV (degrees, percent, percent).
pub fn rgb_to_hsv(rgb: RgbColor) -> HsvColor {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    HsvColor::new(normalize_hue(h), s * 100.0, max * 100.0)
}

/// HSV → OKLCH (through 8-bit sRGB).
pub fn hsv_to_oklch(hsv: HsvColor) -> OklchColor {
    rgb_to_oklch(hsv_to_rgb(hsv))
}

/// OKLCH → HSV (through 8-bit sRGB, so gamut clamping applies).
pub fn oklch_to_hsv(color: OklchColor) -> HsvColor {
    rgb_to_hsv(oklch_to_rgb(color))
}

/// Parse either `#rrggbb` or CSS `oklch(...)` into OKLCH.
pub fn parse_color(input: &str) -> Result<OklchColor, ColorError> {
    let trimmed = input.trim();
    if trimmed.starts_with('#') {
        hex_to_oklch(trimmed)
    } else {
        trimmed.parse()
    }
}

/// Whether the color survives conversion without any channel clamping.
pub fn in_srgb_gamut(color: OklchColor) -> bool {
    const EPS: f64 = 1e-6;
    let (r, g, b) = oklch_to_srgb_unclamped(color);
    [r, g, b].iter().all(|v| (-EPS..=1.0 + EPS).contains(v))
}

/// Gamma-encode one linear channel.
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Remove gamma from one encoded channel.
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn oklch_to_srgb_unclamped(color: OklchColor) -> (f64, f64, f64) {
    let h = color.normalized_hue().to_radians();
    let a = color.c * h.cos();
    let b = color.c * h.sin();
    let (lr, lg, lb) = oklab_to_linear_srgb(color.l / 100.0, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

#[allow(clippy::excessive_precision)]
fn oklab_to_linear_srgb(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = l + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
    let m_ = l - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
    let s_ = l - 0.089_484_177_5 * a - 1.291_485_548_0 * b;

    let l3 = l_ * l_ * l_;
    let m3 = m_ * m_ * m_;
    let s3 = s_ * s_ * s_;

    (
        4.076_741_662_1 * l3 - 3.307_711_591_3 * m3 + 0.230_969_929_2 * s3,
        -1.268_438_004_6 * l3 + 2.609_757_401_1 * m3 - 0.341_319_396_5 * s3,
        -0.004_196_086_3 * l3 - 0.703_418_614_7 * m3 + 1.707_614_701_0 * s3,
    )
}

#[allow(clippy::excessive_precision)]
fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
    let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
    let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    (
        0.210_454_255_3 * l_ + 0.793_617_785_0 * m_ - 0.004_072_046_8 * s_,
        1.977_998_495_1 * l_ - 2.428_592_205_0 * m_ + 0.450_593_709_9 * s_,
        0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766_0 * s_,
    )
}

/// Clamp to `[0, 1]` then quantize. NaN maps to 0.
fn to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
