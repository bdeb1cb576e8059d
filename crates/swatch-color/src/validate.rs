//! Domain validation for OKLCH colors.
//!
//! Range violations are blocking; the high-chroma/extreme-lightness rule is
//! an advisory that is always reported but never makes a color invalid.
//! Every applicable issue is returned together.

use std::fmt;
use std::ops::Range;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::model::OklchColor;

pub const LIGHTNESS_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const CHROMA_RANGE: RangeInclusive<f64> = 0.0..=0.4;
/// Half-open: 360 must be written as 0.
pub const HUE_RANGE: Range<f64> = 0.0..360.0;

pub const ACCESSIBILITY_ADVISORY: &str =
    "high chroma with extreme lightness may reduce accessibility";

const ADVISORY_CHROMA: f64 = 0.3;
const ADVISORY_DARK_L: f64 = 20.0;
const ADVISORY_LIGHT_L: f64 = 80.0;

/// Which OKLCH component an issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorField {
    #[serde(rename = "l")]
    Lightness,
    #[serde(rename = "c")]
    Chroma,
    #[serde(rename = "h")]
    Hue,
}

impl fmt::Display for ColorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorField::Lightness => write!(f, "lightness"),
            ColorField::Chroma => write!(f, "chroma"),
            ColorField::Hue => write!(f, "hue"),
        }
    }
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorIssue {
    OutOfRange {
        field: ColorField,
        value: f64,
        min: f64,
        max: f64,
    },
    Advisory {
        message: String,
    },
}

impl ColorIssue {
    pub fn is_blocking(&self) -> bool {
        matches!(self, ColorIssue::OutOfRange { .. })
    }
}

impl fmt::Display for ColorIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorIssue::OutOfRange {
                field: ColorField::Hue,
                value,
                min,
                max,
            } => write!(f, "hue must be in [{min}, {max}), got {value}"),
            ColorIssue::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} must be in [{min}, {max}], got {value}"),
            ColorIssue::Advisory { message } => f.write_str(message),
        }
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorValidation {
    pub valid: bool,
    pub errors: Vec<ColorIssue>,
}

impl ColorValidation {
    /// Every issue rendered as text, blocking and advisory alike.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    pub fn advisories(&self) -> impl Iterator<Item = &ColorIssue> {
        self.errors.iter().filter(|e| !e.is_blocking())
    }

    pub fn has_advisories(&self) -> bool {
        self.advisories().next().is_some()
    }

    /// `Err(OutOfRange)` with every blocking issue, or the advisories.
    pub fn into_result(self) -> Result<Vec<ColorIssue>, ColorError> {
        let (blocking, advisories): (Vec<_>, Vec<_>) =
            self.errors.into_iter().partition(ColorIssue::is_blocking);
        if blocking.is_empty() {
            Ok(advisories)
        } else {
            Err(ColorError::OutOfRange {
                violations: blocking,
            })
        }
    }
}

/// Check ranges and the accessibility advisory.
pub fn validate(color: OklchColor) -> ColorValidation {
    let mut errors = Vec::new();

    if !LIGHTNESS_RANGE.contains(&color.l) {
        errors.push(ColorIssue::OutOfRange {
            field: ColorField::Lightness,
            value: color.l,
            min: *LIGHTNESS_RANGE.start(),
            max: *LIGHTNESS_RANGE.end(),
        });
    }
    if !CHROMA_RANGE.contains(&color.c) {
        errors.push(ColorIssue::OutOfRange {
            field: ColorField::Chroma,
            value: color.c,
            min: *CHROMA_RANGE.start(),
            max: *CHROMA_RANGE.end(),
        });
    }
    if !HUE_RANGE.contains(&color.h) {
        errors.push(ColorIssue::OutOfRange {
            field: ColorField::Hue,
            value: color.h,
            min: HUE_RANGE.start,
            max: HUE_RANGE.end,
        });
    }

    let extreme_lightness = color.l < ADVISORY_DARK_L || color.l > ADVISORY_LIGHT_L;
    if extreme_lightness && color.c > ADVISORY_CHROMA {
        errors.push(ColorIssue::Advisory {
            message: ACCESSIBILITY_ADVISORY.to_string(),
        });
    }

    let valid = !errors.iter().any(ColorIssue::is_blocking);
    ColorValidation { valid, errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_color_has_no_errors() {
        let v = validate(OklchColor::new(60.0, 0.18, 262.0));
        assert!(v.valid);
        assert!(v.errors.is_empty());
    }

    #[test]
    fn lightness_out_of_range() {
        let v = validate(OklchColor::new(150.0, 0.18, 262.0));
        assert!(!v.valid);
        assert_eq!(v.errors.len(), 1);
        assert!(matches!(
            v.errors[0],
            ColorIssue::OutOfRange {
                field: ColorField::Lightness,
                ..
            }
        ));
    }

    #[test]
    fn errors_accumulate() {
        let v = validate(OklchColor::new(-1.0, 0.5, 360.0));
        assert!(!v.valid);
        let fields: Vec<ColorField> = v
            .errors
            .iter()
            .filter_map(|e| match e {
                ColorIssue::OutOfRange { field, .. } => Some(*field),
                ColorIssue::Advisory { .. } => None,
            })
            .collect();
        assert_eq!(
            fields,
            vec![ColorField::Lightness, ColorField::Chroma, ColorField::Hue]
        );
        // Extreme lightness with high chroma also earns the advisory.
        assert!(v.has_advisories());
    }

    #[test]
    fn advisory_does_not_block() {
        let v = validate(OklchColor::new(10.0, 0.35, 0.0));
        assert!(v.valid);
        assert_eq!(v.messages(), vec![ACCESSIBILITY_ADVISORY.to_string()]);
    }

    #[test]
    fn advisory_boundaries() {
        assert!(!validate(OklchColor::new(20.0, 0.35, 0.0)).has_advisories());
        assert!(!validate(OklchColor::new(80.0, 0.35, 0.0)).has_advisories());
        assert!(!validate(OklchColor::new(90.0, 0.3, 0.0)).has_advisories());
        assert!(validate(OklchColor::new(85.0, 0.31, 0.0)).has_advisories());
    }

    #[test]
    fn nan_is_out_of_range() {
        let v = validate(OklchColor::new(f64::NAN, 0.1, 10.0));
        assert!(!v.valid);
    }

    #[test]
    fn range_edges() {
        assert!(validate(OklchColor::new(0.0, 0.0, 0.0)).valid);
        assert!(validate(OklchColor::new(100.0, 0.4, 359.99)).valid);
        assert!(!validate(OklchColor::new(50.0, 0.1, 360.0)).valid);
        assert!(!validate(OklchColor::new(50.0, -0.01, 10.0)).valid);
    }

    #[test]
    fn into_result_splits_blocking_from_advisory() {
        let ok = validate(OklchColor::new(90.0, 0.35, 10.0)).into_result().unwrap();
        assert_eq!(ok.len(), 1);

        let err = validate(OklchColor::new(150.0, 0.1, 10.0)).into_result().unwrap_err();
        match err {
            ColorError::OutOfRange { violations } => assert_eq!(violations.len(), 1),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn issue_messages() {
        let v = validate(OklchColor::new(150.0, 0.1, 400.0));
        assert_eq!(
            v.messages(),
            vec![
                "lightness must be in [0, 100], got 150".to_string(),
                "hue must be in [0, 360), got 400".to_string(),
            ]
        );
    }
}
