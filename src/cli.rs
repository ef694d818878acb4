//! Command-line interface for term-settings.
//!
//! Loads a settings document and prints resolved snapshots, profiles and
//! color schemes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::composer::SettingsComposer;
use crate::config::{AppSettings, NewTerminalArgs, ProfileId};
use crate::terminal_settings::TerminalSettings;

/// term-settings - resolve terminal session settings from profiles, schemes and globals
#[derive(Parser)]
#[command(name = "term-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file to read (default: ~/.config/term-settings/settings.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (overrides RUST_LOG)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose the settings a new terminal would start with
    Resolve {
        /// Profile GUID or name (default profile when omitted)
        #[arg(long, short)]
        profile: Option<String>,

        /// Command line override
        #[arg(long)]
        commandline: Option<String>,

        /// Starting directory override (used verbatim)
        #[arg(long, value_name = "DIR")]
        starting_directory: Option<String>,

        /// Starting title override
        #[arg(long)]
        title: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// List profiles in display order
    ListProfiles,

    /// List color scheme names
    ListSchemes,

    /// Write a default settings file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Serialize)]
struct ResolvedOutput<'a> {
    profile: ProfileId,
    settings: &'a TerminalSettings,
}

/// Run a parsed command, writing its output to `out`
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Resolve {
            profile,
            commandline,
            starting_directory,
            title,
            format,
        } => {
            let app = load_settings(cli.config.as_deref())?;
            let args = NewTerminalArgs {
                profile,
                commandline,
                starting_directory,
                tab_title: title,
            };
            let (id, settings) = SettingsComposer::build_settings(&app, Some(&args))?;
            let output = ResolvedOutput {
                profile: id,
                settings: &settings,
            };
            let text = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&output)?,
                OutputFormat::Yaml => serde_yaml_ng::to_string(&output)?,
            };
            writeln!(out, "{}", text.trim_end())?;
        }
        Commands::ListProfiles => {
            let app = load_settings(cli.config.as_deref())?;
            for profile in app.profiles.profiles_ordered() {
                let marker = if app.globals.default_profile == Some(profile.guid) {
                    "*"
                } else {
                    " "
                };
                let hidden = if profile.hidden { " (hidden)" } else { "" };
                writeln!(
                    out,
                    "{} {}\t{}\t{}{}",
                    marker,
                    profile.guid,
                    profile.name,
                    profile.color_scheme_name().unwrap_or("-"),
                    hidden
                )?;
            }
        }
        Commands::ListSchemes => {
            let app = load_settings(cli.config.as_deref())?;
            for name in app.schemes.names() {
                writeln!(out, "{}", name)?;
            }
        }
        Commands::Init { force } => {
            let path = cli.config.unwrap_or_else(AppSettings::config_path);
            if path.exists() && !force {
                writeln!(
                    out,
                    "Settings file already exists: {} (use --force to overwrite)",
                    path.display()
                )?;
                return Ok(());
            }
            AppSettings::default().save_to(&path)?;
            writeln!(out, "Wrote default settings to {}", path.display())?;
        }
    }
    Ok(())
}

/// Load the settings document at `path`, or the default location when `None`.
///
/// An explicit path must exist; a missing default file yields defaults.
fn load_settings(path: Option<&Path>) -> Result<AppSettings> {
    match path {
        Some(path) => AppSettings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => AppSettings::load(),
    }
}
