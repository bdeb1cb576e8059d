//! End-to-end tests for the `swatch` binary.
//!
//! Every command runs in an empty temp directory with config discovery
//! pointed away from the user's real files.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SITE: &str = r#"
site:
  title: Studio Nord
theme:
  brand_primary: oklch(45% 0.2 262)
  neutral: slate
  mode: light
content:
  - kind: hero
    title: Hello
custom_section:
  keep: me
"#;

/// Get an isolated Command for the swatch binary.
fn swatch(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("swatch").expect("swatch binary should exist");
    cmd.current_dir(dir)
        .env_remove("SWATCH_CONFIG")
        .env_remove("SWATCH_SITE_DIR")
        .env_remove("SWATCH_LOG")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env("HOME", dir);
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("run swatch");
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

fn write_site(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("site.yaml");
    fs::write(&path, content).expect("write site config");
    path
}

// ============================================================================
// Color tools
// ============================================================================

mod color_tools {
    use super::*;

    #[test]
    fn convert_hex() {
        let temp = TempDir::new().unwrap();
        let json = json_stdout(swatch(temp.path()).args(["convert", "#ff0000"]));
        assert_eq!(json["hex"], "#ff0000");
        assert_eq!(json["rgb"]["r"], 255);
        let l = json["oklch"]["l"].as_f64().unwrap();
        assert!((l - 62.8).abs() < 0.1, "l = {l}");
    }

    #[test]
    fn convert_rejects_garbage() {
        let temp = TempDir::new().unwrap();
        swatch(temp.path())
            .args(["convert", "teal"])
            .assert()
            .code(10)
            .stderr(predicate::str::contains("\"code\": 20"));
    }

    #[test]
    fn convert_human_error() {
        let temp = TempDir::new().unwrap();
        swatch(temp.path())
            .args(["--format", "summary", "--no-color", "convert", "#12345"])
            .assert()
            .code(10)
            .stderr(predicate::str::contains("Invalid Color"));
    }

    #[test]
    fn palette_css() {
        let temp = TempDir::new().unwrap();
        swatch(temp.path())
            .args(["palette", "oklch(60% 0.18 262)", "--css", "--name", "brand"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with(":root {"))
            .stdout(predicate::str::contains("--brand-50: #"))
            .stdout(predicate::str::contains("--brand-900: #"));
    }

    #[test]
    fn palette_json_has_ten_shades() {
        let temp = TempDir::new().unwrap();
        let json = json_stdout(swatch(temp.path()).args(["palette", "#3366cc"]));
        assert_eq!(json["palette"].as_object().unwrap().len(), 10);
        assert_eq!(json["palette"]["500"], "#3366cc");
    }

    #[test]
    fn palette_rejects_out_of_range_base() {
        let temp = TempDir::new().unwrap();
        swatch(temp.path())
            .args(["palette", "oklch(150% 0.18 262)"])
            .assert()
            .code(12);
    }

    #[test]
    fn contrast_black_on_white() {
        let temp = TempDir::new().unwrap();
        let mut cmd = swatch(temp.path());
        cmd.args(["contrast", "#000000", "#ffffff"]);
        let json = json_stdout(&mut cmd);
        let ratio = json["ratio"].as_f64().unwrap();
        assert!((ratio - 21.0).abs() < 0.01);
        assert_eq!(json["wcagAAA"], true);
        cmd.assert().success();
    }

    #[test]
    fn contrast_failure_exit_code() {
        let temp = TempDir::new().unwrap();
        swatch(temp.path())
            .args(["--format", "summary", "contrast", "#777777", "#888888"])
            .assert()
            .code(2)
            .stdout(predicate::str::contains("fail"));
    }

    #[test]
    fn validate_out_of_range() {
        let temp = TempDir::new().unwrap();
        let mut cmd = swatch(temp.path());
        cmd.args(["validate", "oklch(150% 0.18 262)"]);
        let json = json_stdout(&mut cmd);
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0]["field"], "l");
        cmd.assert().code(12);
    }

    #[test]
    fn validate_advisory() {
        let temp = TempDir::new().unwrap();
        swatch(temp.path())
            .args(["validate", "oklch(10% 0.35 0)"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "high chroma with extreme lightness may reduce accessibility",
            ));
    }

    #[test]
    fn harmony_complementary_wraps_hue() {
        let temp = TempDir::new().unwrap();
        let json = json_stdout(swatch(temp.path()).args(["harmony", "oklch(60% 0.18 262)"]));
        assert_eq!(json["harmony"]["type"], "complementary");
        let h = json["harmony"]["colors"][0]["h"].as_f64().unwrap();
        assert!((h - 82.0).abs() < 1e-9);
    }

    #[test]
    fn harmony_analogous_order() {
        let temp = TempDir::new().unwrap();
        let json = json_stdout(
            swatch(temp.path()).args(["harmony", "oklch(60% 0.18 10)", "--kind", "analogous"]),
        );
        let colors = json["harmony"]["colors"].as_array().unwrap();
        assert_eq!(colors.len(), 2);
        assert!((colors[0]["h"].as_f64().unwrap() - 40.0).abs() < 1e-9);
        assert!((colors[1]["h"].as_f64().unwrap() - 340.0).abs() < 1e-9);
    }
}

// ============================================================================
// Site config commands
// ============================================================================

mod site_commands {
    use super::*;

    #[test]
    fn check_without_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let mut cmd = swatch(temp.path());
        cmd.arg("check");
        let json = json_stdout(&mut cmd);
        assert_eq!(json["config"]["source"], "builtin default");
        assert_eq!(json["validation"]["valid"], true);

        let code = cmd.output().unwrap().status.code().unwrap();
        assert!(code < 10, "unexpected exit {code}");
    }

    #[test]
    fn check_reports_every_validation_error() {
        let temp = TempDir::new().unwrap();
        let path = write_site(
            temp.path(),
            "site: {title: ''}\ntheme:\n  brand_primary: {l: 150, c: 0.5, h: 262}\n",
        );
        let mut cmd = swatch(temp.path());
        cmd.args(["check", "--config"]).arg(&path);
        let json = json_stdout(&mut cmd);
        assert_eq!(json["validation"]["valid"], false);
        assert_eq!(json["validation"]["errors"].as_array().unwrap().len(), 3);
        assert_eq!(json["status"], "ERR_VALIDATION");
        cmd.assert().code(12);
    }

    #[test]
    fn check_missing_explicit_config() {
        let temp = TempDir::new().unwrap();
        swatch(temp.path())
            .args(["check", "--config", "nope.yaml"])
            .assert()
            .code(11)
            .stderr(predicate::str::contains("nope.yaml"));
    }

    #[test]
    fn check_finds_config_in_working_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.yaml"), SITE).unwrap();
        let json = json_stdout(swatch(temp.path()).arg("check"));
        assert_eq!(json["config"]["source"], "working directory");
        assert_eq!(json["config"]["content_hash"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn theme_css_follows_config() {
        let temp = TempDir::new().unwrap();
        let path = write_site(temp.path(), SITE);
        swatch(temp.path())
            .args(["theme", "css", "--config"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("color-scheme: light;"))
            .stdout(predicate::str::contains("--primary-500: #"))
            .stdout(predicate::str::contains("--neutral-50: #"));
    }

    #[test]
    fn theme_set_persists_and_keeps_other_sections() {
        let temp = TempDir::new().unwrap();
        let path = write_site(temp.path(), SITE);

        let mut cmd = swatch(temp.path());
        cmd.args(["theme", "set", "--mode", "dark", "--neutral", "zinc", "--config"])
            .arg(&path);
        let json = json_stdout(&mut cmd);
        assert_eq!(json["changed"], true);

        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("mode: dark"));
        assert!(saved.contains("neutral: zinc"));
        assert!(saved.contains("custom_section"));
        assert!(saved.contains("kind: hero"));

        swatch(temp.path())
            .args(["theme", "css", "--config"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("color-scheme: dark;"));
    }

    #[test]
    fn theme_set_rejects_out_of_range_primary() {
        let temp = TempDir::new().unwrap();
        let path = write_site(temp.path(), SITE);

        swatch(temp.path())
            .args(["theme", "set", "--primary", "oklch(60% 0.18 400)", "--config"])
            .arg(&path)
            .assert()
            .code(12);

        assert_eq!(fs::read_to_string(&path).unwrap(), SITE);
    }

    #[test]
    fn theme_set_without_config_fails() {
        let temp = TempDir::new().unwrap();
        swatch(temp.path())
            .args(["theme", "set", "--mode", "dark"])
            .assert()
            .code(11);
    }
}

// ============================================================================
// CLI surface
// ============================================================================

mod cli_surface {
    use super::*;

    #[test]
    fn unknown_command_is_args_error() {
        let temp = TempDir::new().unwrap();
        swatch(temp.path())
            .arg("nonexistent-command")
            .assert()
            .code(10)
            .stderr(predicate::str::contains("error"));
    }

    #[test]
    fn help_succeeds() {
        let temp = TempDir::new().unwrap();
        swatch(temp.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("palette"));
    }

    #[test]
    fn version_json() {
        let temp = TempDir::new().unwrap();
        let json = json_stdout(swatch(temp.path()).arg("version"));
        assert_eq!(json["swatch_version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn verbose_logs_go_to_stderr() {
        let temp = TempDir::new().unwrap();
        let output = swatch(temp.path()).args(["-vv", "check"]).output().unwrap();
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
        assert!(!output.stderr.is_empty());
    }
}
