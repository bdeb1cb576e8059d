//! Theme report: everything the editor preview and `swatch check` show for
//! one [`ThemeConfig`].

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;
use swatch_color::{
    contrast, generate_palette, in_srgb_gamut, to_hex, to_rgb, validate, ColorPalette,
    ColorValidation, ContrastResult, HexColor, OklchColor, RgbColor, Shade, WcagLevel,
};
use swatch_config::{NeutralTone, ThemeConfig, ThemeMode};

use crate::exit_codes::ExitCode;

/// One brand color in every notation plus its validation.
#[derive(Debug, Clone, Serialize)]
pub struct ColorSummary {
    pub css: String,
    pub oklch: OklchColor,
    pub hex: HexColor,
    pub rgb: RgbColor,
    /// False when conversion had to clamp a channel.
    pub in_gamut: bool,
    pub validation: ColorValidation,
}

impl ColorSummary {
    pub fn new(color: OklchColor) -> Self {
        ColorSummary {
            css: color.to_string(),
            oklch: color,
            hex: to_hex(color),
            rgb: to_rgb(color),
            in_gamut: in_srgb_gamut(color),
            validation: validate(color),
        }
    }
}

/// A foreground/background pair and how it scores.
#[derive(Debug, Clone, Serialize)]
pub struct ContrastCheck {
    pub foreground: String,
    pub background: String,
    pub foreground_hex: HexColor,
    pub background_hex: HexColor,
    #[serde(flatten)]
    pub result: ContrastResult,
    pub level: WcagLevel,
}

impl ContrastCheck {
    fn new(foreground: (String, &HexColor), background: (String, &HexColor)) -> Self {
        let result = contrast(foreground.1.to_rgb(), background.1.to_rgb());
        ContrastCheck {
            foreground: foreground.0,
            background: background.0,
            foreground_hex: foreground.1.clone(),
            background_hex: background.1.clone(),
            level: result.level(),
            result,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeReport {
    pub schema_version: &'static str,
    pub mode: ThemeMode,
    pub neutral: NeutralTone,
    pub primary: ColorSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<ColorSummary>,
    /// Keyed by `primary`, `secondary`, `neutral`.
    pub palettes: BTreeMap<&'static str, ColorPalette>,
    pub contrast: Vec<ContrastCheck>,
    /// Contrast pairs that fail WCAG AA for body text.
    pub warnings: Vec<String>,
}

const LIGHT_BRAND_SHADES: [Shade; 3] = [Shade::S500, Shade::S600, Shade::S700];
const DARK_BRAND_SHADES: [Shade; 3] = [Shade::S300, Shade::S400, Shade::S500];
const LIGHT_TEXT_SHADES: [Shade; 2] = [Shade::S900, Shade::S600];
const DARK_TEXT_SHADES: [Shade; 2] = [Shade::S50, Shade::S300];

impl ThemeReport {
    pub fn build(theme: &ThemeConfig) -> Self {
        let mut palettes = BTreeMap::new();
        palettes.insert("primary", generate_palette(theme.brand_primary));
        if let Some(secondary) = theme.brand_secondary {
            palettes.insert("secondary", generate_palette(secondary));
        }
        let neutral = generate_palette(theme.neutral.base());

        let white = HexColor::from(RgbColor::WHITE);
        let black = HexColor::from(RgbColor::BLACK);
        let mut checks = Vec::new();

        if theme.mode.includes_light() {
            let backgrounds = [
                ("white".to_string(), &white),
                ("neutral-50".to_string(), &neutral[Shade::S50]),
            ];
            push_checks(&mut checks, &palettes, &neutral, &backgrounds, &LIGHT_BRAND_SHADES, &LIGHT_TEXT_SHADES);
        }
        if theme.mode.includes_dark() {
            let backgrounds = [
                ("black".to_string(), &black),
                ("neutral-900".to_string(), &neutral[Shade::S900]),
            ];
            push_checks(&mut checks, &palettes, &neutral, &backgrounds, &DARK_BRAND_SHADES, &DARK_TEXT_SHADES);
        }

        let warnings = checks
            .iter()
            .filter(|c| !c.result.wcag_aa)
            .map(|c| {
                format!(
                    "{} on {} is {:.2}:1 ({}), below WCAG AA 4.5:1",
                    c.foreground, c.background, c.result.ratio, c.level
                )
            })
            .collect();

        palettes.insert("neutral", neutral);

        ThemeReport {
            schema_version: swatch_common::SCHEMA_VERSION,
            mode: theme.mode,
            neutral: theme.neutral,
            primary: ColorSummary::new(theme.brand_primary),
            secondary: theme.brand_secondary.map(ColorSummary::new),
            palettes,
            contrast: checks,
            warnings,
        }
    }

    fn brand_colors(&self) -> impl Iterator<Item = &ColorSummary> {
        std::iter::once(&self.primary).chain(self.secondary.as_ref())
    }

    pub fn has_blocking_errors(&self) -> bool {
        self.brand_colors().any(|c| !c.validation.valid)
    }

    pub fn has_advisories(&self) -> bool {
        self.brand_colors().any(|c| c.validation.has_advisories())
    }

    /// The most severe outcome, as the CLI reports it.
    pub fn outcome(&self) -> ExitCode {
        if self.has_blocking_errors() {
            ExitCode::ValidationError
        } else if !self.warnings.is_empty() {
            ExitCode::ContrastWarnings
        } else if self.has_advisories() {
            ExitCode::Advisories
        } else {
            ExitCode::Clean
        }
    }

    /// CSS custom properties for every palette.
    pub fn to_css(&self) -> String {
        let scheme = match self.mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "light dark",
        };
        let mut css = String::from(":root {\n");
        let _ = writeln!(css, "  color-scheme: {scheme};");
        for (name, palette) in &self.palettes {
            css.push_str(&palette.to_css_variables(name));
        }
        css.push_str("}\n");
        css
    }

    pub fn to_markdown(&self) -> String {
        let mut md = String::from("# Theme report\n\n");
        let _ = writeln!(md, "- mode: {}", self.mode);
        let _ = writeln!(md, "- neutral: {}", self.neutral);
        let _ = writeln!(md, "- primary: `{}` ({})", self.primary.css, self.primary.hex);
        if let Some(secondary) = &self.secondary {
            let _ = writeln!(md, "- secondary: `{}` ({})", secondary.css, secondary.hex);
        }

        for (label, color) in [("primary", Some(&self.primary)), ("secondary", self.secondary.as_ref())] {
            let Some(color) = color else { continue };
            for message in color.validation.messages() {
                let _ = writeln!(md, "- {label}: {message}");
            }
        }

        md.push_str("\n## Palettes\n\n| shade |");
        for name in self.palettes.keys() {
            let _ = write!(md, " {name} |");
        }
        md.push_str("\n|---|");
        for _ in self.palettes.keys() {
            md.push_str("---|");
        }
        md.push('\n');
        for shade in Shade::ALL {
            let _ = write!(md, "| {shade} |");
            for palette in self.palettes.values() {
                let _ = write!(md, " {} |", palette[shade]);
            }
            md.push('\n');
        }

        md.push_str("\n## Contrast\n\n| foreground | background | ratio | level |\n|---|---|---|---|\n");
        for check in &self.contrast {
            let _ = writeln!(
                md,
                "| {} | {} | {:.2} | {} |",
                check.foreground, check.background, check.result.ratio, check.level
            );
        }

        if !self.warnings.is_empty() {
            md.push_str("\n## Warnings\n\n");
            for warning in &self.warnings {
                let _ = writeln!(md, "- {warning}");
            }
        }
        md
    }

    /// One line for `--format summary`.
    pub fn summary_line(&self) -> String {
        let passing = self.contrast.iter().filter(|c| c.result.wcag_aa).count();
        format!(
            "{} primary={} contrast={}/{} AA warnings={}",
            self.outcome().code_name(),
            self.primary.hex,
            passing,
            self.contrast.len(),
            self.warnings.len()
        )
    }
}

fn push_checks(
    checks: &mut Vec<ContrastCheck>,
    brands: &BTreeMap<&'static str, ColorPalette>,
    neutral: &ColorPalette,
    backgrounds: &[(String, &HexColor)],
    brand_shades: &[Shade],
    text_shades: &[Shade],
) {
    for (bg_name, bg) in backgrounds {
        for (name, palette) in brands {
            for &shade in brand_shades {
                checks.push(ContrastCheck::new(
                    (format!("{name}-{shade}"), &palette[shade]),
                    (bg_name.clone(), *bg),
                ));
            }
        }
        for &shade in text_shades {
            checks.push(ContrastCheck::new(
                (format!("neutral-{shade}"), &neutral[shade]),
                (bg_name.clone(), *bg),
            ));
        }
    }
}
