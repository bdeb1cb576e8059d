//! Swatch color utilities.
//!
//! Pure, allocation-light color math shared by the config loader, the theme
//! report and the CLI:
//! - OKLCH / OKLab / sRGB / HSV / hex conversion
//! - ten-step shade palettes derived from one base color
//! - WCAG 2.x relative luminance and contrast classification
//! - domain validation with accessibility advisories
//! - hue harmonies (complementary, triadic, analogous)

pub mod contrast;
pub mod convert;
pub mod error;
pub mod harmony;
pub mod model;
pub mod palette;
pub mod validate;

pub use contrast::{contrast, palette_contrast, relative_luminance, ContrastResult, WcagLevel};
pub use convert::*;
pub use error::ColorError;
pub use harmony::{harmony, ColorHarmony, HarmonyType};
pub use model::{HexColor, HsvColor, OklchColor, RgbColor};
pub use palette::{generate_palette, palette_oklch, ColorPalette, Shade};
pub use validate::{
    validate, ColorField, ColorIssue, ColorValidation, ACCESSIBILITY_ADVISORY, CHROMA_RANGE,
    HUE_RANGE, LIGHTNESS_RANGE,
};
