//! CLI entry point for editable-widgets
//!
//! Provides command-line interface for validating and listing widget
//! documents, and launching the GUI demo.

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use colored::*;
use editable_widgets::config::validator::{DocumentValidator, ValidationLevel};
use editable_widgets::config::{DocumentStore, WidgetDocument};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DEFAULT_DOCUMENT: &str = "~/.config/editable-widgets/widgets.toml";

#[derive(Parser)]
#[command(name = "editable-widgets")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// More log output (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a widget document
    Check {
        /// Path to widget document
        #[arg(short, long, default_value = DEFAULT_DOCUMENT)]
        document: PathBuf,
    },

    /// List the rows of a widget document
    List {
        /// Path to widget document
        #[arg(short, long, default_value = DEFAULT_DOCUMENT)]
        document: PathBuf,
    },

    /// Launch the GUI demo
    Gui {
        /// Path to widget document
        #[arg(short, long, default_value = DEFAULT_DOCUMENT)]
        document: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet)?;

    match cli.command {
        Commands::Check { document } => check_document(&expand(&document)?),
        Commands::List { document } => {
            list_rows(&expand(&document)?)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Gui { document } => launch_gui(expand(&document)?),
    }
}

fn init_logging(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };

    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .map_err(|e| anyhow!("Failed to initialise logging: {}", e))
}

/// Expands a leading tilde
fn expand(path: &Path) -> anyhow::Result<PathBuf> {
    let raw = path
        .to_str()
        .ok_or_else(|| anyhow!("Invalid path encoding"))?;
    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

fn load(path: &Path) -> anyhow::Result<WidgetDocument> {
    let store = DocumentStore::new(path.to_path_buf())?;
    Ok(store.read_document()?)
}

/// Validate a document and print every issue
///
/// Fails the process when the report has errors.
fn check_document(path: &Path) -> anyhow::Result<ExitCode> {
    println!("{} Checking document: {}", "→".cyan(), path.display());

    let document = load(path)?;
    println!(
        "{} Found {} row{} and {} column{}\n",
        "✓".green(),
        document.rows.len(),
        if document.rows.len() == 1 { "" } else { "s" },
        document.table.columns.len(),
        if document.table.columns.len() == 1 { "" } else { "s" },
    );

    let report = DocumentValidator::new().validate(&document);

    if report.issues.is_empty() {
        println!("{} {}", "✓".green().bold(), "No issues found!".bold());
        return Ok(ExitCode::SUCCESS);
    }

    for issue in &report.issues {
        let marker = match issue.validation_level {
            ValidationLevel::Error => "✗ error".red().bold(),
            ValidationLevel::Warning => "⚠ warning".yellow().bold(),
        };
        println!("{} {} {}", marker, format!("[{}]", issue.location).dimmed(), issue.message);
        if let Some(suggestion) = &issue.suggestion {
            println!("    {} {}", "→".cyan(), suggestion);
        }
    }

    println!(
        "\n{} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );

    if report.has_errors() {
        println!("{}", "✗ This document will be rejected on save!".red());
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Print the rows as an aligned table
fn list_rows(path: &Path) -> anyhow::Result<()> {
    let document = load(path)?;
    let columns = document.columns();

    println!("{}", format!("Rows from: {}\n", path.display()).bold());

    let mut widths: Vec<usize> = std::iter::once("Key".len())
        .chain(columns.iter().map(|column| column.title.chars().count()))
        .collect();
    let cells: Vec<Vec<String>> = document
        .rows
        .iter()
        .map(|row| {
            std::iter::once(row.key.to_string())
                .chain(columns.iter().map(|column| column.render(row).replace('\n', " ")))
                .collect()
        })
        .collect();
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let titles: Vec<String> = std::iter::once("Key".to_string())
        .chain(columns.iter().map(|column| column.title.clone()))
        .collect();
    println!("{}", pad_line(&titles, &widths).bold());

    for line in &cells {
        if let (Some((key, rest)), Some((key_width, rest_widths))) = (line.split_first(), widths.split_first()) {
            let key = format!("{:<width$}", key, width = *key_width);
            println!("{}  {}", key.cyan(), pad_line(rest, rest_widths));
        }
    }

    println!("\n{} Total: {} rows", "✓".green(), document.rows.len());

    Ok(())
}

fn pad_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(feature = "gui")]
fn launch_gui(path: PathBuf) -> anyhow::Result<ExitCode> {
    let app = editable_widgets::ui::App::new(path)?;
    Ok(app.run().into())
}

#[cfg(not(feature = "gui"))]
fn launch_gui(_path: PathBuf) -> anyhow::Result<ExitCode> {
    Err(anyhow!("Built without the `gui` feature"))
}
