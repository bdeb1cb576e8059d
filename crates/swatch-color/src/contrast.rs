//! WCAG 2.x relative luminance and contrast ratio.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert::srgb_to_linear;
use crate::model::RgbColor;
use crate::palette::{ColorPalette, Shade};

/// Minimum ratio for normal text at level AA.
pub const WCAG_AA: f64 = 4.5;
/// Minimum ratio for normal text at level AAA.
pub const WCAG_AAA: f64 = 7.0;
/// Minimum ratio for large text at level AA.
pub const WCAG_AA_LARGE: f64 = 3.0;

/// Contrast between two colors. Derived on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    pub ratio: f64,
    #[serde(rename = "wcagAA")]
    pub wcag_aa: bool,
    #[serde(rename = "wcagAAA")]
    pub wcag_aaa: bool,
    #[serde(rename = "wcagAALarge")]
    pub wcag_aa_large: bool,
}

impl ContrastResult {
    pub fn level(&self) -> WcagLevel {
        WcagLevel::from_ratio(self.ratio)
    }
}

/// Highest WCAG level a ratio satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WcagLevel {
    Fail,
    AaLarge,
    Aa,
    Aaa,
}

impl WcagLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= WCAG_AAA {
            WcagLevel::Aaa
        } else if ratio >= WCAG_AA {
            WcagLevel::Aa
        } else if ratio >= WCAG_AA_LARGE {
            WcagLevel::AaLarge
        } else {
            WcagLevel::Fail
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WcagLevel::Fail => write!(f, "fail"),
            WcagLevel::AaLarge => write!(f, "AA large"),
            WcagLevel::Aa => write!(f, "AA"),
            WcagLevel::Aaa => write!(f, "AAA"),
        }
    }
}

/// Relative luminance, 0 (black) to 1 (white).
pub fn relative_luminance(rgb: RgbColor) -> f64 {
    let r = srgb_to_linear(f64::from(rgb.r) / 255.0);
    let g = srgb_to_linear(f64::from(rgb.g) / 255.0);
    let b = srgb_to_linear(f64::from(rgb.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two colors; operand order does not matter.
pub fn contrast(a: RgbColor, b: RgbColor) -> ContrastResult {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    let ratio = (lighter + 0.05) / (darker + 0.05);

    ContrastResult {
        ratio,
        wcag_aa: ratio >= WCAG_AA,
        wcag_aaa: ratio >= WCAG_AAA,
        wcag_aa_large: ratio >= WCAG_AA_LARGE,
    }
}

/// Contrast of every palette shade against one background.
pub fn palette_contrast(palette: &ColorPalette, background: RgbColor) -> Vec<(Shade, ContrastResult)> {
    palette
        .iter()
        .map(|(shade, hex)| (shade, contrast(hex.to_rgb(), background)))
        .collect()
}
