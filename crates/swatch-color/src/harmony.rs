//! Hue harmonies: complementary, triadic and analogous companions.
//!
//! Only the hue rotates; lightness and chroma pass through unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::OklchColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyType {
    Complementary,
    Triadic,
    Analogous,
}

impl HarmonyType {
    pub const ALL: [HarmonyType; 3] = [
        HarmonyType::Complementary,
        HarmonyType::Triadic,
        HarmonyType::Analogous,
    ];

    /// Hue offsets in output order, with their labels.
    fn rotations(self) -> &'static [(f64, &'static str)] {
        match self {
            HarmonyType::Complementary => &[(180.0, "complementary")],
            HarmonyType::Triadic => &[(120.0, "triadic +120°"), (240.0, "triadic +240°")],
            HarmonyType::Analogous => &[(30.0, "analogous +30°"), (-30.0, "analogous -30°")],
        }
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarmonyType::Complementary => write!(f, "complementary"),
            HarmonyType::Triadic => write!(f, "triadic"),
            HarmonyType::Analogous => write!(f, "analogous"),
        }
    }
}

impl FromStr for HarmonyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "complementary" | "complement" => Ok(HarmonyType::Complementary),
            "triadic" | "triad" => Ok(HarmonyType::Triadic),
            "analogous" => Ok(HarmonyType::Analogous),
            _ => Err(format!("unknown harmony type: {}", s)),
        }
    }
}

/// Companion colors for a base color. The base itself is not included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorHarmony {
    #[serde(rename = "type")]
    pub kind: HarmonyType,
    pub colors: Vec<OklchColor>,
    pub names: Vec<String>,
}

pub fn harmony(base: OklchColor, kind: HarmonyType) -> ColorHarmony {
    let (colors, names) = kind
        .rotations()
        .iter()
        .map(|(offset, name)| (base.with_hue(base.h + offset), (*name).to_string()))
        .unzip();
    ColorHarmony {
        kind,
        colors,
        names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: OklchColor = OklchColor::new(60.0, 0.18, 262.0);

    #[test]
    fn complementary_rotates_180() {
        let h = harmony(BASE, HarmonyType::Complementary);
        assert_eq!(h.colors.len(), 1);
        assert_eq!(h.colors[0].h, 82.0);
        assert_eq!(h.names, vec!["complementary"]);
    }

    #[test]
    fn triadic_order() {
        let h = harmony(BASE, HarmonyType::Triadic);
        let hues: Vec<f64> = h.colors.iter().map(|c| c.h).collect();
        assert_eq!(hues, vec![22.0, 142.0]);
    }

    #[test]
    fn analogous_clockwise_first() {
        let h = harmony(BASE, HarmonyType::Analogous);
        let hues: Vec<f64> = h.colors.iter().map(|c| c.h).collect();
        assert_eq!(hues, vec![292.0, 232.0]);

        let wrap = harmony(OklchColor::new(50.0, 0.1, 10.0), HarmonyType::Analogous);
        assert_eq!(wrap.colors[1].h, 340.0);
    }

    #[test]
    fn lightness_and_chroma_pass_through() {
        for kind in HarmonyType::ALL {
            let h = harmony(BASE, kind);
            assert_eq!(h.colors.len(), h.names.len());
            for c in &h.colors {
                assert_eq!(c.l, BASE.l);
                assert_eq!(c.c, BASE.c);
            }
        }
    }

    #[test]
    fn parse_and_display() {
        for kind in HarmonyType::ALL {
            assert_eq!(kind.to_string().parse::<HarmonyType>().unwrap(), kind);
        }
        assert!("tetradic".parse::<HarmonyType>().is_err());
    }

    #[test]
    fn serializes_type_field() {
        let json = serde_json::to_value(harmony(BASE, HarmonyType::Triadic)).unwrap();
        assert_eq!(json["type"], "triadic");
        assert_eq!(json["colors"].as_array().unwrap().len(), 2);
    }
}
