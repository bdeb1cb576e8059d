//! Conversions from crate-level errors into [`swatch_common::Error`].

use swatch_color::ColorError;
use swatch_common::Error;
use swatch_config::{ConfigError, ValidationError};

pub fn color_error(err: ColorError) -> Error {
    match err {
        ColorError::InvalidFormat { .. } => Error::InvalidColor(err.to_string()),
        ColorError::OutOfRange { .. } => Error::ColorOutOfRange(err.to_string()),
    }
}

pub fn validation_error(err: ValidationError) -> Error {
    match &err {
        ValidationError::InvalidColor { .. } => Error::ColorOutOfRange(err.to_string()),
        ValidationError::InvalidMetadataKey { .. } | ValidationError::TooManyMetadataKeys { .. } => {
            Error::InvalidContent(err.to_string())
        }
        _ => Error::InvalidSiteConfig(err.to_string()),
    }
}

pub fn config_error(err: ConfigError) -> Error {
    match err {
        ConfigError::NotFound { path } => Error::ConfigNotFound { path },
        ConfigError::Parse { .. } => Error::Yaml(err.to_string()),
        ConfigError::Io { source, .. } => Error::Io(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn color_errors_keep_their_category() {
        let err = "#12".parse::<swatch_color::HexColor>().unwrap_err();
        assert_eq!(color_error(err).code(), 20);
    }

    #[test]
    fn not_found_keeps_path() {
        let err = config_error(ConfigError::NotFound {
            path: PathBuf::from("/x/config.yaml"),
        });
        assert!(matches!(err, Error::ConfigNotFound { ref path } if path == &PathBuf::from("/x/config.yaml")));
    }

    #[test]
    fn parse_errors_are_yaml_errors() {
        let source = swatch_config::SiteConfig::parse_yaml("theme: [").unwrap_err();
        let err = config_error(ConfigError::Parse {
            path: PathBuf::from("config.yaml"),
            source,
        });
        assert!(matches!(err, Error::Yaml(_)));
        assert_eq!(err.code(), 62);
    }

    #[test]
    fn metadata_errors_are_content_errors() {
        let err = validation_error(ValidationError::TooManyMetadataKeys {
            block: "content[0]".into(),
            count: 40,
            max: 32,
        });
        assert_eq!(err.code(), 13);
    }
}
