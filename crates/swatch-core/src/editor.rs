//! Theme editor session.
//!
//! An explicit `open → edit → save → close` context around a [`ThemeStore`].
//! Edits are held in memory until [`ThemeEditor::save`]; the editor never
//! holds a color that fails range validation.

use swatch_color::{validate, ColorError, ColorIssue, ColorValidation, OklchColor};
use swatch_config::{
    validate_theme, ConfigError, NeutralTone, SiteConfig, ThemeConfig, ThemeMode, ThemeStore,
    ValidationError,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::report::ThemeReport;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("rejected color: {0}")]
    InvalidColor(#[from] ColorError),

    #[error("theme is not valid: {0}")]
    InvalidTheme(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] ConfigError),
}

pub struct ThemeEditor<S: ThemeStore> {
    store: S,
    config: SiteConfig,
    saved: ThemeConfig,
}

impl<S: ThemeStore> ThemeEditor<S> {
    /// Load the current configuration from `store`.
    pub fn open(store: S) -> Result<Self, EditorError> {
        let config = store.load()?;
        info!(store = %store.describe(), "opened theme editor");
        Ok(ThemeEditor {
            saved: config.theme.clone(),
            store,
            config,
        })
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.config.theme
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Replace the primary brand color. Out-of-range colors are rejected and
    /// leave the theme untouched; advisories are returned with the accepted
    /// color.
    pub fn set_brand_primary(&mut self, color: OklchColor) -> Result<ColorValidation, EditorError> {
        let validation = checked(color)?;
        debug!(color = %color, "set brand_primary");
        self.config.theme.brand_primary = color;
        Ok(validation)
    }

    /// Replace or clear the secondary brand color.
    pub fn set_brand_secondary(
        &mut self,
        color: Option<OklchColor>,
    ) -> Result<ColorValidation, EditorError> {
        let validation = match color {
            Some(c) => checked(c)?,
            None => ColorValidation {
                valid: true,
                errors: Vec::new(),
            },
        };
        debug!(color = ?color.map(|c| c.to_string()), "set brand_secondary");
        self.config.theme.brand_secondary = color;
        Ok(validation)
    }

    pub fn set_neutral(&mut self, tone: NeutralTone) {
        debug!(%tone, "set neutral");
        self.config.theme.neutral = tone;
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        debug!(%mode, "set mode");
        self.config.theme.mode = mode;
    }

    /// Report for the theme as currently edited (saved or not).
    pub fn preview(&self) -> ThemeReport {
        ThemeReport::build(&self.config.theme)
    }

    pub fn is_dirty(&self) -> bool {
        self.config.theme != self.saved
    }

    /// Write the edited theme back.
    ///
    /// The store is re-read first and only `theme` is replaced, so edits to
    /// other sections made since [`ThemeEditor::open`] are kept.
    pub fn save(&mut self) -> Result<(), EditorError> {
        validate_theme(&self.config.theme).into_result()?;

        let mut latest = self.store.load()?;
        latest.theme = self.config.theme.clone();
        self.store.save(&latest)?;

        info!(
            store = %self.store.describe(),
            primary = %latest.theme.brand_primary,
            "saved theme"
        );
        self.saved = latest.theme.clone();
        self.config = latest;
        Ok(())
    }

    /// End the session and hand the store back. Unsaved edits are dropped.
    pub fn close(self) -> S {
        if self.is_dirty() {
            warn!(store = %self.store.describe(), "closing theme editor with unsaved changes");
        }
        self.store
    }
}

fn checked(color: OklchColor) -> Result<ColorValidation, ColorError> {
    let validation = validate(color);
    if validation.valid {
        return Ok(validation);
    }
    Err(ColorError::OutOfRange {
        violations: validation
            .errors
            .into_iter()
            .filter(ColorIssue::is_blocking)
            .collect(),
    })
}

impl EditorError {
    /// Convert to the unified CLI error.
    pub fn into_common(self) -> swatch_common::Error {
        match self {
            EditorError::InvalidColor(e) => crate::errors::color_error(e),
            EditorError::InvalidTheme(e) => crate::errors::validation_error(e),
            EditorError::Store(e) => crate::errors::config_error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_config::MemoryStore;

    #[test]
    fn rejects_out_of_range_and_keeps_theme() {
        let mut editor = ThemeEditor::open(MemoryStore::new()).unwrap();
        let before = editor.theme().clone();

        let err = editor
            .set_brand_primary(OklchColor::new(150.0, 0.18, 262.0))
            .unwrap_err();
        assert!(matches!(err, EditorError::InvalidColor(ColorError::OutOfRange { .. })));
        assert_eq!(editor.theme(), &before);
        assert!(!editor.is_dirty());
    }

    #[test]
    fn accepts_advisory_colors() {
        let mut editor = ThemeEditor::open(MemoryStore::new()).unwrap();
        let validation = editor
            .set_brand_primary(OklchColor::new(10.0, 0.35, 0.0))
            .unwrap();
        assert!(validation.valid);
        assert!(validation.has_advisories());
        assert!(editor.is_dirty());
    }

    #[test]
    fn save_clears_dirty_and_persists() {
        let store = MemoryStore::new();
        let observer = store.clone();
        let mut editor = ThemeEditor::open(store).unwrap();

        editor.set_mode(ThemeMode::Dark);
        editor.set_neutral(NeutralTone::Stone);
        assert!(editor.is_dirty());
        editor.save().unwrap();
        assert!(!editor.is_dirty());

        let saved = observer.current().unwrap();
        assert_eq!(saved.theme.mode, ThemeMode::Dark);
        assert_eq!(saved.theme.neutral, NeutralTone::Stone);
        assert_eq!(observer.save_count(), 1);
    }

    #[test]
    fn save_keeps_concurrent_content_edits() {
        let store = MemoryStore::new();
        let mut other = store.clone();
        let mut editor = ThemeEditor::open(store).unwrap();

        let mut external = SiteConfig::default();
        external.site.title = "Renamed".into();
        other.save(&external).unwrap();

        editor.set_mode(ThemeMode::Auto);
        editor.save().unwrap();

        assert_eq!(editor.config().site.title, "Renamed");
        assert_eq!(editor.theme().mode, ThemeMode::Auto);
    }

    #[test]
    fn close_returns_store_without_saving() {
        let store = MemoryStore::new();
        let mut editor = ThemeEditor::open(store).unwrap();
        editor.set_mode(ThemeMode::Dark);
        let store = editor.close();
        assert_eq!(store.save_count(), 0);
        assert!(store.current().is_none());
    }

    #[test]
    fn clearing_secondary() {
        let mut editor = ThemeEditor::open(MemoryStore::new()).unwrap();
        editor
            .set_brand_secondary(Some(OklchColor::new(70.0, 0.1, 30.0)))
            .unwrap();
        assert!(editor.theme().brand_secondary.is_some());
        let validation = editor.set_brand_secondary(None).unwrap();
        assert!(validation.valid);
        assert!(editor.theme().brand_secondary.is_none());
    }

    #[test]
    fn preview_reflects_unsaved_edits() {
        let mut editor = ThemeEditor::open(MemoryStore::new()).unwrap();
        editor.set_mode(ThemeMode::Auto);
        let report = editor.preview();
        assert_eq!(report.mode, ThemeMode::Auto);
        assert!(report.contrast.iter().any(|c| c.background == "black"));
    }
}
