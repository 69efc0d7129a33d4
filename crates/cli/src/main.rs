//! permcmp command-line tool.
//!
//! Provides subcommands for viewing a single ProcessPro permission export,
//! comparing two exports side by side (optionally showing only the
//! permissions unique to each user), and generating a default configuration
//! file.

mod render;
mod style;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use permcmp_core::config::{AppConfig, ColorMode};
use permcmp_core::{load_export, CompareSession, UserSlot};

// ---------------------------------------------------------------------------
// CLI argument definitions
// ---------------------------------------------------------------------------

/// permcmp command-line tool.
#[derive(Parser, Debug)]
#[command(
    name = "permcmp",
    version,
    about = "Compare ProcessPro permission exports side by side"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the permissions in one export file.
    Show {
        /// Path to the export file.
        file: PathBuf,

        /// Print the parsed export as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Compare two export files side by side.
    Compare {
        /// Export file for user 1 (left column).
        file1: PathBuf,

        /// Export file for user 2 (right column).
        file2: PathBuf,

        /// Show only the permissions unique to each user.
        #[arg(long, conflicts_with = "full")]
        unique: bool,

        /// Show both users' full permission sets.
        #[arg(long, conflicts_with = "unique")]
        full: bool,

        /// Print the comparison as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate a default configuration file.
    Init {
        /// Output path for the generated config file.
        #[arg(short, long, default_value = "./permcmp.toml")]
        output: PathBuf,
    },
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    // Minimal logging for CLI; RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { output } => cmd_init(&output),
        _ => {
            let config = load_config(cli.config.as_deref())?;
            apply_color_mode(config.display.color);

            match cli.command {
                Commands::Show { file, json } => cmd_show(&file, json, &config),
                Commands::Compare {
                    file1,
                    file2,
                    unique,
                    full,
                    json,
                } => cmd_compare(&file1, &file2, unique, full, json, &config),
                _ => unreachable!(),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Config helpers
// ---------------------------------------------------------------------------

fn load_config(explicit: Option<&str>) -> Result<AppConfig> {
    let explicit = explicit.map(expand_tilde);
    AppConfig::load_or_default(explicit.as_deref().map(Path::new))
        .context("failed to load configuration file")
}

fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Always => console::set_colors_enabled(true),
        ColorMode::Never => console::set_colors_enabled(false),
        ColorMode::Auto => {}
    }
}

// ---------------------------------------------------------------------------
// Subcommand implementations
// ---------------------------------------------------------------------------

fn cmd_show(file: &Path, json: bool, config: &AppConfig) -> Result<()> {
    let export = load_export(file)
        .with_context(|| format!("failed to load export {}", file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&export)?);
        return Ok(());
    }

    let title = render::pane_title(export.username.as_deref(), UserSlot::One);

    println!();
    println!(
        "{}",
        render::tree(&title, &export.companies, config.display.show_empty_companies)
    );
    println!(
        "{}",
        style::dim(&format!(
            "{} permissions in {} companies",
            export.total_permissions(),
            export.company_count()
        ))
    );

    Ok(())
}

fn cmd_compare(
    file1: &Path,
    file2: &Path,
    unique: bool,
    full: bool,
    json: bool,
    config: &AppConfig,
) -> Result<()> {
    let mut session = CompareSession::new();
    session
        .load(UserSlot::One, file1)
        .with_context(|| format!("failed to load export {}", file1.display()))?;
    session
        .load(UserSlot::Two, file2)
        .with_context(|| format!("failed to load export {}", file2.display()))?;

    let unique_only = resolve_unique_mode(unique, full, config.compare.unique_only);
    session.set_compare_mode(unique_only);

    let report = session
        .report()
        .context("comparison requires two loaded exports")?;
    let view1 = session.view(UserSlot::One);
    let view2 = session.view(UserSlot::Two);
    let title1 = render::pane_title(session.username(UserSlot::One), UserSlot::One);
    let title2 = render::pane_title(session.username(UserSlot::Two), UserSlot::Two);

    if json {
        if unique_only {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            let payload = serde_json::json!({
                "user1": {
                    "username": session.username(UserSlot::One),
                    "companies": view1,
                },
                "user2": {
                    "username": session.username(UserSlot::Two),
                    "companies": view2,
                },
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        return Ok(());
    }

    println!();
    println!("{}", style::header("Permission Comparison"));
    if unique_only {
        println!("{}", style::dim("showing permissions unique to each user"));
    }
    println!();

    let table = render::compare_table(
        &title1,
        &view1,
        &title2,
        &view2,
        config.display.show_empty_companies,
        config.display.color,
    );
    println!("{}", table);
    println!();

    let name1 = session
        .username(UserSlot::One)
        .unwrap_or(UserSlot::One.default_label())
        .to_string();
    let name2 = session
        .username(UserSlot::Two)
        .unwrap_or(UserSlot::Two.default_label())
        .to_string();

    if unique_only {
        if !report.has_differences() {
            println!(
                "{}",
                style::success("No differences: both users hold identical permissions.")
            );
        } else {
            println!(
                "{}: {} unique permission(s)   {}: {} unique permission(s)",
                style::user_one(&name1),
                report.user1.unique_count(),
                style::user_two(&name2),
                report.user2.unique_count()
            );
        }
    } else {
        let count1: usize = view1.values().map(|perms| perms.len()).sum();
        let count2: usize = view2.values().map(|perms| perms.len()).sum();
        println!(
            "{}: {} permission(s) in {} company(ies)",
            style::user_one(&name1),
            count1,
            view1.len()
        );
        println!(
            "{}: {} permission(s) in {} company(ies)",
            style::user_two(&name2),
            count2,
            view2.len()
        );
    }

    Ok(())
}

fn cmd_init(output: &Path) -> Result<()> {
    if output.exists() {
        anyhow::bail!(
            "file already exists: {}. Use a different path or remove the existing file.",
            output.display()
        );
    }

    std::fs::write(output, AppConfig::default_template())
        .context("failed to write config file")?;

    println!("Default configuration written to {}", output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit the file to adjust display and compare defaults");
    match AppConfig::default_path() {
        Some(default_path) => println!(
            "  2. Move it to {} to have it picked up automatically, or pass --config {}",
            default_path.display(),
            output.display()
        ),
        None => println!("  2. Pass --config {} to use it", output.display()),
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Utilities
// ---------------------------------------------------------------------------

/// Resolve the compare mode for `permcmp compare`: an explicit `--unique` or
/// `--full` flag wins over the configured default.
fn resolve_unique_mode(unique: bool, full: bool, config_default: bool) -> bool {
    if unique {
        true
    } else if full {
        false
    } else {
        config_default
    }
}

/// Expand `~` to the user's home directory.
fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}/{}", home.display(), rest);
        }
    }
    path.to_string()
}
