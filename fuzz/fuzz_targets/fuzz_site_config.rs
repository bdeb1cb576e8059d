//! Fuzz target for site config YAML loading.
//!
//! Loading and validating must never panic, only return errors.

#![no_main]

use libfuzzer_sys::fuzz_target;
use swatch_config::SiteConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = SiteConfig::parse_yaml(text) {
        let _ = config.validate();
        let _ = config.to_yaml();
    }
});
