//! Ten-step shade scales derived from a single base color.
//!
//! Shade 500 is the base color itself. Lighter shades (50–400) use a fixed
//! lightness table but never go darker than the base; darker shades
//! (600–900) step down 10 points each from the base. Every target is
//! clamped to `[0, 100]`, so very light or very dark bases can collapse
//! neighbouring shades onto the same value.
//!
//! Chroma follows a taper `min(1, l/20, (100-l)/15)` at the target
//! lightness, so the extremes fade to neutral instead of requesting colors
//! far outside sRGB. Hue never changes.
//!
//! Clamping to sRGB can move the rendered lightness of a saturated color
//! away from its target, so shades are placed outward from 500 against the
//! lightness their rendered neighbour actually decodes to. A lighter shade
//! targets at least that lightness and a darker shade at most that
//! lightness. If the rendered color still lands on the wrong side, chroma
//! is stepped down towards gray, and as a last resort the shade repeats its
//! neighbour. Decoded lightness is therefore non-increasing from 50 to 900.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert::{oklch_to_hex, oklch_to_rgb, rgb_to_oklch};
use crate::model::{HexColor, OklchColor};

/// Shade keys from lightest (50) to darkest (900).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shade {
    #[serde(rename = "50")]
    S50,
    #[serde(rename = "100")]
    S100,
    #[serde(rename = "200")]
    S200,
    #[serde(rename = "300")]
    S300,
    #[serde(rename = "400")]
    S400,
    #[serde(rename = "500")]
    S500,
    #[serde(rename = "600")]
    S600,
    #[serde(rename = "700")]
    S700,
    #[serde(rename = "800")]
    S800,
    #[serde(rename = "900")]
    S900,
}

impl Shade {
    pub const ALL: [Shade; 10] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
    ];

    /// Numeric key (50, 100, …, 900).
    pub const fn key(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
        }
    }

    pub fn from_key(key: u16) -> Option<Shade> {
        Shade::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Target lightness for this shade given the base lightness.
    pub fn target_lightness(self, base_l: f64) -> f64 {
        let target = match self {
            Shade::S50 => base_l.max(95.0),
            Shade::S100 => base_l.max(90.0),
            Shade::S200 => base_l.max(80.0),
            Shade::S300 => base_l.max(70.0),
            Shade::S400 => base_l.max(65.0),
            Shade::S500 => base_l,
            Shade::S600 => base_l - 10.0,
            Shade::S700 => base_l - 20.0,
            Shade::S800 => base_l - 30.0,
            Shade::S900 => base_l - 40.0,
        };
        target.clamp(0.0, 100.0)
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Chroma multiplier at a given lightness.
pub fn chroma_taper(l: f64) -> f64 {
    (l / 20.0).min((100.0 - l) / 15.0).clamp(0.0, 1.0)
}

/// Shade → hex mapping. Serializes as `{"50": "#…", …, "900": "#…"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorPalette {
    shades: BTreeMap<Shade, HexColor>,
}

impl ColorPalette {
    pub fn get(&self, shade: Shade) -> Option<&HexColor> {
        self.shades.get(&shade)
    }

    /// Shades in order from 50 to 900.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, &HexColor)> {
        self.shades.iter().map(|(s, h)| (*s, h))
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    /// CSS custom properties, one per line: `--{prefix}-{shade}: #rrggbb;`.
    pub fn to_css_variables(&self, prefix: &str) -> String {
        let mut css = String::new();
        for (shade, hex) in self.iter() {
            css.push_str(&format!("  --{}-{}: {};\n", prefix, shade, hex));
        }
        css
    }
}

impl std::ops::Index<Shade> for ColorPalette {
    type Output = HexColor;

    fn index(&self, shade: Shade) -> &HexColor {
        &self.shades[&shade]
    }
}

/// Chroma multipliers tried, in order, when a shade renders on the wrong
/// side of its neighbour.
const CHROMA_STEPS: [f64; 5] = [1.0, 0.75, 0.5, 0.25, 0.0];

/// Lightness of `color` after it is rendered to 8-bit sRGB and decoded.
fn rendered_lightness(color: OklchColor) -> f64 {
    rgb_to_oklch(oklch_to_rgb(color)).l
}

/// Pick a color for `shade` given its already placed neighbour towards 500.
///
/// `lighter` selects the direction: lighter shades must decode at or above
/// the neighbour, darker shades at or below it.
fn place_shade(base: OklchColor, shade: Shade, neighbour: OklchColor, lighter: bool) -> OklchColor {
    let bound = rendered_lightness(neighbour);
    let table = shade.target_lightness(base.l);
    let target = if lighter { table.max(bound) } else { table.min(bound) };
    let l = target.clamp(0.0, 100.0);
    let c = base.c * chroma_taper(l);

    CHROMA_STEPS
        .into_iter()
        .map(|step| OklchColor::new(l, c * step, base.h))
        .find(|candidate| {
            let rendered = rendered_lightness(*candidate);
            if lighter {
                rendered >= bound
            } else {
                rendered <= bound
            }
        })
        .unwrap_or(neighbour)
}

/// OKLCH value of every shade, before conversion to hex.
pub fn palette_oklch(base: OklchColor) -> Vec<(Shade, OklchColor)> {
    let mut colors = [base; 10];
    // Shade::ALL[5] is 500.
    for i in (0..5).rev() {
        colors[i] = place_shade(base, Shade::ALL[i], colors[i + 1], true);
    }
    for i in 6..10 {
        colors[i] = place_shade(base, Shade::ALL[i], colors[i - 1], false);
    }
    Shade::ALL.into_iter().zip(colors).collect()
}

/// Derive the ten-step palette for `base`.
pub fn generate_palette(base: OklchColor) -> ColorPalette {
    let shades = palette_oklch(base)
        .into_iter()
        .map(|(shade, color)| (shade, oklch_to_hex(color)))
        .collect();
    ColorPalette { shades }
}
