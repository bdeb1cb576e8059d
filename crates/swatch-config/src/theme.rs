//! Theme settings stored under `theme:` in the site configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use swatch_color::OklchColor;

/// Brand colors, neutral family and light/dark preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_brand_primary", with = "css_color")]
    pub brand_primary: OklchColor,

    #[serde(
        default,
        with = "css_color::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub brand_secondary: Option<OklchColor>,

    #[serde(default)]
    pub neutral: NeutralTone,

    #[serde(default)]
    pub mode: ThemeMode,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            brand_primary: DEFAULT_BRAND_PRIMARY,
            brand_secondary: None,
            neutral: NeutralTone::default(),
            mode: ThemeMode::default(),
        }
    }
}

/// Brand color used when no site config is found.
pub const DEFAULT_BRAND_PRIMARY: OklchColor = OklchColor::new(60.0, 0.18, 262.0);

fn default_brand_primary() -> OklchColor {
    DEFAULT_BRAND_PRIMARY
}

/// Neutral gray family used for text, borders and surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeutralTone {
    #[default]
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
}

impl NeutralTone {
    pub const ALL: [NeutralTone; 5] = [
        NeutralTone::Slate,
        NeutralTone::Gray,
        NeutralTone::Zinc,
        NeutralTone::Neutral,
        NeutralTone::Stone,
    ];

    /// Base color the neutral palette is derived from.
    pub const fn base(self) -> OklchColor {
        match self {
            NeutralTone::Slate => OklchColor::new(55.4, 0.046, 257.4),
            NeutralTone::Gray => OklchColor::new(55.1, 0.027, 264.4),
            NeutralTone::Zinc => OklchColor::new(55.2, 0.016, 285.9),
            NeutralTone::Neutral => OklchColor::new(55.6, 0.0, 0.0),
            NeutralTone::Stone => OklchColor::new(55.3, 0.013, 58.1),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            NeutralTone::Slate => "slate",
            NeutralTone::Gray => "gray",
            NeutralTone::Zinc => "zinc",
            NeutralTone::Neutral => "neutral",
            NeutralTone::Stone => "stone",
        }
    }
}

impl fmt::Display for NeutralTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NeutralTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        NeutralTone::ALL
            .into_iter()
            .find(|tone| tone.as_str() == lower)
            .ok_or_else(|| {
                format!("unknown neutral tone {s:?} (expected slate, gray, zinc, neutral or stone)")
            })
    }
}

/// Which background(s) the theme targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    /// Follows the visitor's system preference, so both must work.
    Auto,
}

impl ThemeMode {
    pub fn includes_light(self) -> bool {
        matches!(self, ThemeMode::Light | ThemeMode::Auto)
    }

    pub fn includes_dark(self) -> bool {
        matches!(self, ThemeMode::Dark | ThemeMode::Auto)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => f.write_str("light"),
            ThemeMode::Dark => f.write_str("dark"),
            ThemeMode::Auto => f.write_str("auto"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "auto" => Ok(ThemeMode::Auto),
            _ => Err(format!("unknown theme mode {s:?} (expected light, dark or auto)")),
        }
    }
}

/// Serde adapter: colors are written as CSS `oklch(...)` and read from
/// CSS strings, `#rrggbb` or `{l, c, h}` maps.
///
/// Only syntax is checked here. Range problems are left to
/// [`crate::validate`] so that every one of them can be reported at once.
pub mod css_color {
    use serde::{Deserialize, Deserializer, Serializer};
    use swatch_color::{parse_color, OklchColor};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Components { l: f64, c: f64, h: f64 },
    }

    impl Repr {
        fn into_color<E: serde::de::Error>(self) -> Result<OklchColor, E> {
            match self {
                Repr::Text(s) => parse_color(&s).map_err(E::custom),
                Repr::Components { l, c, h } => Ok(OklchColor::new(l, c, h)),
            }
        }
    }

    pub fn serialize<S: Serializer>(color: &OklchColor, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(color)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OklchColor, D::Error> {
        Repr::deserialize(deserializer)?.into_color()
    }

    pub mod option {
        use super::Repr;
        use serde::{Deserialize, Deserializer, Serializer};
        use swatch_color::OklchColor;

        pub fn serialize<S: Serializer>(
            color: &Option<OklchColor>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match color {
                Some(c) => serializer.collect_str(c),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<OklchColor>, D::Error> {
            Option::<Repr>::deserialize(deserializer)?
                .map(Repr::into_color)
                .transpose()
        }
    }
}
