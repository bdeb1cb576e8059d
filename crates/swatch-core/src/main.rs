//! swatch - OKLCH palettes and WCAG contrast for a site theme
//!
//! The main entry point handles:
//! - One-off color tools (convert, palette, contrast, validate, harmony)
//! - Site config checks for CI (`check`)
//! - Reading and editing the theme stored in the site config (`theme`)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use swatch_color::{
    contrast, generate_palette, harmony, in_srgb_gamut, oklch_to_hsv, parse_color, to_hex, to_rgb,
    validate, HarmonyType, OklchColor,
};
use swatch_common::{format_error_human, Error, OutputFormat, StructuredError, SCHEMA_VERSION};
use swatch_config::{
    resolve_config, ConfigPath, ConfigSnapshot, NeutralTone, SiteConfig, ThemeMode,
    YamlFileStore,
};
use swatch_core::editor::ThemeEditor;
use swatch_core::errors::{color_error, config_error};
use swatch_core::exit_codes::ExitCode;
use swatch_core::logging::{generate_run_id, init_logging, LogConfig, LogFormat, LogLevel};
use swatch_core::report::ThemeReport;
use tracing::{debug, info};

/// swatch - OKLCH palette and accessibility toolkit
#[derive(Parser)]
#[command(name = "swatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Path to the site config file
    #[arg(long, global = true, env = "SWATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log format on stderr (human, jsonl)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color in every notation (hex, rgb, hsv, oklch)
    Convert {
        /// `#rrggbb` or `oklch(L% C H)`
        color: String,
    },

    /// Generate the ten-shade palette for a base color
    Palette {
        color: String,

        /// Print CSS custom properties instead
        #[arg(long)]
        css: bool,

        /// Variable prefix for --css
        #[arg(long, default_value = "primary")]
        name: String,
    },

    /// WCAG contrast ratio between two colors
    Contrast { foreground: String, background: String },

    /// Check a color against the OKLCH ranges and accessibility advisory
    Validate { color: String },

    /// Hue-rotated companion colors
    Harmony {
        color: String,

        #[arg(long, short, default_value = "complementary")]
        kind: HarmonyType,
    },

    /// Validate the site config and report theme contrast
    Check,

    /// Read or edit the theme in the site config
    Theme(ThemeArgs),

    /// Print version information
    Version,
}

#[derive(Args)]
struct ThemeArgs {
    #[command(subcommand)]
    command: ThemeCommands,
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// Report for the configured theme
    Show,

    /// CSS custom properties for the configured theme
    Css,

    /// Change theme settings and save them
    Set(SetArgs),
}

#[derive(Args)]
struct SetArgs {
    /// New primary brand color
    #[arg(long)]
    primary: Option<String>,

    /// New secondary brand color
    #[arg(long, conflicts_with = "clear_secondary")]
    secondary: Option<String>,

    /// Remove the secondary brand color
    #[arg(long)]
    clear_secondary: bool,

    #[arg(long)]
    neutral: Option<NeutralTone>,

    #[arg(long)]
    mode: Option<ThemeMode>,
}

fn main() -> std::process::ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version land here too
            let code = if err.use_stderr() {
                ExitCode::ArgsError
            } else {
                ExitCode::Clean
            };
            return code.into();
        }
    };

    let level = LogLevel::default().adjusted(cli.global.verbose, cli.global.quiet);
    let cli_level = (cli.global.verbose > 0 || cli.global.quiet).then_some(level);
    let log_config = LogConfig::from_env(cli_level, cli.global.log_format);
    init_logging(&log_config);

    let global = &cli.global;
    let result = match &cli.command {
        Commands::Convert { color } => run_convert(global, color),
        Commands::Palette { color, css, name } => run_palette(global, color, *css, name),
        Commands::Contrast {
            foreground,
            background,
        } => run_contrast(global, foreground, background),
        Commands::Validate { color } => run_validate(global, color),
        Commands::Harmony { color, kind } => run_harmony(global, color, *kind),
        Commands::Check => run_check(global),
        Commands::Theme(args) => match &args.command {
            ThemeCommands::Show => run_theme_show(global),
            ThemeCommands::Css => run_theme_css(global),
            ThemeCommands::Set(set) => run_theme_set(global, set),
        },
        Commands::Version => {
            print_version(global);
            Ok(ExitCode::Clean)
        }
    };

    let code = match result {
        Ok(code) => code,
        Err(err) => report_error(global, &err),
    };
    debug!(exit = %code, "done");
    code.into()
}

// ============================================================================
// Output helpers
// ============================================================================

fn report_error(global: &GlobalOpts, err: &Error) -> ExitCode {
    match global.format {
        OutputFormat::Json => eprintln!("{}", StructuredError::from(err).to_json_pretty()),
        OutputFormat::Exitcode => {}
        _ => eprintln!("{}", format_error_human(err, !global.no_color)),
    }
    ExitCode::for_error(err)
}

fn print_json(value: &impl Serialize) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print `value` as JSON, or `human()` for md/summary. Nothing for exitcode.
fn emit(global: &GlobalOpts, value: &impl Serialize, human: impl FnOnce() -> String) -> Result<(), Error> {
    match global.format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Md | OutputFormat::Summary => {
            println!("{}", human());
            Ok(())
        }
        OutputFormat::Exitcode => Ok(()),
    }
}

fn parse_color_arg(input: &str) -> Result<OklchColor, Error> {
    parse_color(input).map_err(color_error)
}

/// Resolve and load the site config. A missing config is only an error
/// when a path was given explicitly.
fn load_site(global: &GlobalOpts) -> Result<(ConfigPath, SiteConfig, Option<String>), Error> {
    let resolved = resolve_config(global.config.as_deref());
    match &resolved.path {
        Some(path) => {
            let (config, content) = SiteConfig::from_file_with_source(path).map_err(config_error)?;
            info!(path = %path.display(), source = %resolved.source, "loaded site config");
            Ok((resolved, config, Some(content)))
        }
        None => {
            info!("no site config found; using built-in defaults");
            Ok((resolved, SiteConfig::default(), None))
        }
    }
}

// ============================================================================
// Color tools
// ============================================================================

#[derive(Serialize)]
struct ConvertOutput {
    input: String,
    oklch: OklchColor,
    css: String,
    hex: swatch_color::HexColor,
    rgb: swatch_color::RgbColor,
    hsv: swatch_color::HsvColor,
    in_gamut: bool,
}

fn run_convert(global: &GlobalOpts, input: &str) -> Result<ExitCode, Error> {
    let color = parse_color_arg(input)?;
    let out = ConvertOutput {
        input: input.to_string(),
        oklch: color,
        css: color.to_string(),
        hex: to_hex(color),
        rgb: to_rgb(color),
        hsv: oklch_to_hsv(color),
        in_gamut: in_srgb_gamut(color),
    };
    emit(global, &out, || match global.format {
        OutputFormat::Summary => format!("{:.4} {} {}", out.oklch, out.hex, out.rgb),
        _ => format!(
            "| notation | value |\n|---|---|\n| oklch | `{:.4}` |\n| hex | `{}` |\n| rgb | `{}` |\n| hsv | `{:.1} {:.3} {:.3}` |",
            out.oklch, out.hex, out.rgb, out.hsv.h, out.hsv.s, out.hsv.v
        ),
    })?;
    Ok(ExitCode::Clean)
}

fn run_palette(global: &GlobalOpts, input: &str, css: bool, name: &str) -> Result<ExitCode, Error> {
    let base = parse_color_arg(input)?;
    validate(base).into_result().map_err(color_error)?;
    let palette = generate_palette(base);

    if css {
        if global.format != OutputFormat::Exitcode {
            print!(":root {{\n{}}}\n", palette.to_css_variables(name));
        }
        return Ok(ExitCode::Clean);
    }

    let out = serde_json::json!({
        "base": base.to_string(),
        "palette": &palette,
    });
    emit(global, &out, || {
        palette
            .iter()
            .map(|(shade, hex)| format!("{shade:>4}  {hex}"))
            .collect::<Vec<_>>()
            .join("\n")
    })?;
    Ok(ExitCode::Clean)
}

fn run_contrast(global: &GlobalOpts, fg: &str, bg: &str) -> Result<ExitCode, Error> {
    let fg_color = parse_color_arg(fg)?;
    let bg_color = parse_color_arg(bg)?;
    let result = contrast(to_rgb(fg_color), to_rgb(bg_color));

    let out = serde_json::json!({
        "foreground": to_hex(fg_color),
        "background": to_hex(bg_color),
        "ratio": result.ratio,
        "wcagAA": result.wcag_aa,
        "wcagAAA": result.wcag_aaa,
        "wcagAALarge": result.wcag_aa_large,
        "level": result.level(),
    });
    emit(global, &out, || format!("{:.2}:1 {}", result.ratio, result.level()))?;

    Ok(if result.wcag_aa {
        ExitCode::Clean
    } else {
        ExitCode::ContrastWarnings
    })
}

fn run_validate(global: &GlobalOpts, input: &str) -> Result<ExitCode, Error> {
    let color = parse_color_arg(input)?;
    let validation = validate(color);

    emit(global, &validation, || {
        if validation.errors.is_empty() {
            format!("{color}: ok")
        } else {
            let status = if validation.valid { "ok with advisories" } else { "invalid" };
            let mut lines = vec![format!("{color}: {status}")];
            lines.extend(validation.messages().into_iter().map(|m| format!("- {m}")));
            lines.join("\n")
        }
    })?;

    Ok(if !validation.valid {
        ExitCode::ValidationError
    } else if validation.has_advisories() {
        ExitCode::Advisories
    } else {
        ExitCode::Clean
    })
}

fn run_harmony(global: &GlobalOpts, input: &str, kind: HarmonyType) -> Result<ExitCode, Error> {
    let base = parse_color_arg(input)?;
    let result = harmony(base, kind);
    let hex: Vec<_> = result.colors.iter().map(|c| to_hex(*c)).collect();

    let out = serde_json::json!({
        "base": base.to_string(),
        "harmony": &result,
        "hex": &hex,
    });
    emit(global, &out, || {
        result
            .names
            .iter()
            .zip(result.colors.iter().zip(&hex))
            .map(|(name, (color, hex))| format!("{name}: {color} {hex}"))
            .collect::<Vec<_>>()
            .join("\n")
    })?;
    Ok(ExitCode::Clean)
}

// ============================================================================
// Site config commands
// ============================================================================

fn run_check(global: &GlobalOpts) -> Result<ExitCode, Error> {
    let run_id = generate_run_id();
    let (resolved, config, content) = load_site(global)?;

    let snapshot = match &content {
        Some(text) => ConfigSnapshot::new(&config.theme, &resolved, text),
        None => ConfigSnapshot::defaults_only(),
    };
    let validation = config.validate();
    let report = ThemeReport::build(&config.theme);

    let code = if !validation.is_valid() {
        ExitCode::ValidationError
    } else {
        report.outcome()
    };
    info!(%run_id, outcome = %code, errors = validation.errors.len(), "check finished");

    let errors: Vec<_> = validation
        .errors
        .iter()
        .map(|e| serde_json::json!({ "code": e.code(), "message": e.to_string() }))
        .collect();
    let response = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "run_id": run_id,
        "status": code.code_name(),
        "config": &snapshot,
        "validation": {
            "valid": validation.is_valid(),
            "errors": errors,
            "advisories": &validation.advisories,
        },
        "report": &report,
    });

    emit(global, &response, || match global.format {
        OutputFormat::Summary => format!(
            "{} errors={} {}",
            code.code_name(),
            validation.errors.len(),
            report.summary_line()
        ),
        _ => {
            let mut md = format!(
                "# swatch check\n\n- config: {} ({})\n- status: {}\n",
                snapshot.path.as_deref().unwrap_or("built-in defaults"),
                snapshot.source,
                code.code_name()
            );
            if !validation.is_valid() || !validation.advisories.is_empty() {
                md.push_str("\n## Validation\n\n");
                for message in validation.messages() {
                    md.push_str(&format!("- {message}\n"));
                }
            }
            md.push('\n');
            md.push_str(&report.to_markdown());
            md
        }
    })?;
    Ok(code)
}

fn run_theme_show(global: &GlobalOpts) -> Result<ExitCode, Error> {
    let (_, config, _) = load_site(global)?;
    let report = ThemeReport::build(&config.theme);
    emit(global, &report, || match global.format {
        OutputFormat::Summary => report.summary_line(),
        _ => report.to_markdown(),
    })?;
    Ok(report.outcome())
}

fn run_theme_css(global: &GlobalOpts) -> Result<ExitCode, Error> {
    let (_, config, _) = load_site(global)?;
    let report = ThemeReport::build(&config.theme);
    if global.format != OutputFormat::Exitcode {
        print!("{}", report.to_css());
    }
    Ok(ExitCode::Clean)
}

fn run_theme_set(global: &GlobalOpts, args: &SetArgs) -> Result<ExitCode, Error> {
    let resolved = resolve_config(global.config.as_deref());
    let path = resolved.path.ok_or_else(|| Error::ConfigNotFound {
        path: PathBuf::from(swatch_config::resolve::CONFIG_FILENAME),
    })?;

    let mut editor = ThemeEditor::open(YamlFileStore::new(&path)).map_err(|e| e.into_common())?;
    let mut advisories = Vec::new();

    if let Some(primary) = &args.primary {
        let validation = editor
            .set_brand_primary(parse_color_arg(primary)?)
            .map_err(|e| e.into_common())?;
        advisories.extend(validation.messages());
    }
    if let Some(secondary) = &args.secondary {
        let validation = editor
            .set_brand_secondary(Some(parse_color_arg(secondary)?))
            .map_err(|e| e.into_common())?;
        advisories.extend(validation.messages());
    } else if args.clear_secondary {
        editor
            .set_brand_secondary(None)
            .map_err(|e| e.into_common())?;
    }
    if let Some(tone) = args.neutral {
        editor.set_neutral(tone);
    }
    if let Some(mode) = args.mode {
        editor.set_mode(mode);
    }

    let changed = editor.is_dirty();
    if changed {
        editor.save().map_err(|e| e.into_common())?;
    }
    let report = editor.preview();
    editor.close();

    let out = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "path": path.display().to_string(),
        "changed": changed,
        "advisories": &advisories,
        "report": &report,
    });
    emit(global, &out, || {
        let mut text = format!(
            "{} {}",
            if changed { "saved" } else { "unchanged" },
            path.display()
        );
        for advisory in &advisories {
            text.push_str(&format!("\n- {advisory}"));
        }
        text
    })?;

    Ok(if advisories.is_empty() {
        ExitCode::Clean
    } else {
        ExitCode::Advisories
    })
}

fn print_version(global: &GlobalOpts) {
    let version_info = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "swatch_version": env!("CARGO_PKG_VERSION"),
        "rust_version": env!("CARGO_PKG_RUST_VERSION"),
    });

    match global.format {
        OutputFormat::Json => {
            if let Ok(text) = serde_json::to_string_pretty(&version_info) {
                println!("{text}");
            }
        }
        OutputFormat::Exitcode => {}
        _ => {
            println!("swatch {}", env!("CARGO_PKG_VERSION"));
            println!("schema version: {}", SCHEMA_VERSION);
        }
    }
}
