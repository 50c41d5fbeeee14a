use anyhow::Context;
use clap::{Parser, Subcommand};
use flashvault_core::config::Settings;
use flashvault_core::logging::init_logging;
use flashvault_core::vocabulary::{deletion_set, source_folders};
use flashvault_core::{MigratedDocument, MigrationReport, Migrator, WriteMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "flashvault",
    about = "Flashcard tag maintenance for a markdown vault"
)]
struct Cli {
    /// Defaults to `migrate-tags`
    #[command(subcommand)]
    command: Option<Commands>,

    /// Vault root directory
    #[arg(long, default_value = ".")]
    vault: PathBuf,

    /// Settings file (default: <vault>/.flashvault/settings.json)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite legacy flashcard tags across the vault
    MigrateTags {
        /// Print the changes as diffs without writing any file
        #[arg(long)]
        dry_run: bool,
    },
    /// Write a default settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
    /// Show the effective settings and tag tables
    Status,
}

fn settings_path(cli: &Cli) -> PathBuf {
    cli.config
        .clone()
        .unwrap_or_else(|| cli.vault.join(".flashvault").join("settings.json"))
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let path = settings_path(cli);
    Settings::load_or_default(&path)
        .with_context(|| format!("failed to load settings from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        None => cmd_migrate(&cli, false),
        Some(Commands::MigrateTags { dry_run }) => cmd_migrate(&cli, *dry_run),
        Some(Commands::Init { force }) => cmd_init(&cli, *force),
        Some(Commands::Status) => cmd_status(&cli),
    }
}

fn cmd_migrate(cli: &Cli, dry_run: bool) -> anyhow::Result<()> {
    let settings = load_settings(cli)?;

    let log_dir = settings.logging.dir.as_ref().map(|dir| cli.vault.join(dir));
    let _guard = init_logging(&settings.logging.filter, log_dir.as_deref())?;
    tracing::info!(settings = %settings_path(cli).display(), "Settings loaded");

    let mode = if dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Apply
    };
    let migrator = Migrator::new(settings.vault, mode);

    let report = migrator.run_with(&cli.vault, |doc| {
        print!("{}", render_document(doc, migrator.mode()));
    });

    if report.error_count() > 0 {
        tracing::warn!(
            errors = report.error_count(),
            "Some documents could not be migrated"
        );
    }
    print!("{}", render_summary(&report, migrator.mode()));

    Ok(())
}

/// Console line(s) for one changed document.
fn render_document(doc: &MigratedDocument<'_>, mode: WriteMode) -> String {
    let relative = doc.relative_path.display().to_string();
    match mode {
        WriteMode::Apply => format!("Migrated: {}\n", relative),
        WriteMode::DryRun => format!(
            "Would migrate: {}\n{}",
            relative,
            doc.change.unified_diff(&relative)
        ),
    }
}

/// End-of-run summary, preceded by a blank line.
fn render_summary(report: &MigrationReport, mode: WriteMode) -> String {
    let mut out = String::from("\n");
    match mode {
        WriteMode::Apply => {
            out.push_str("Migration complete!\n");
            out.push_str(&format!("Files migrated: {}\n", report.migrated_count()));
        }
        WriteMode::DryRun => {
            out.push_str("Dry run complete, no files written.\n");
            out.push_str(&format!("Files to migrate: {}\n", report.migrated_count()));
        }
    }
    out.push_str(&format!("Errors: {}\n", report.error_count()));
    out
}

fn cmd_init(cli: &Cli, force: bool) -> anyhow::Result<()> {
    let path = settings_path(cli);
    if path.exists() && !force {
        eprintln!(
            "Settings already exist at {}. Use --force to overwrite.",
            path.display()
        );
        std::process::exit(1);
    }

    Settings::default()
        .save(&path)
        .with_context(|| format!("failed to write settings to {}", path.display()))?;
    println!("Settings written to {}", path.display());

    Ok(())
}

fn cmd_status(cli: &Cli) -> anyhow::Result<()> {
    let path = settings_path(cli);
    let settings = load_settings(cli)?;

    println!("Flashvault Status");
    println!("=================");
    println!();
    println!("Vault: {}", cli.vault.display());
    if path.exists() {
        println!("Settings: {}", path.display());
    } else {
        println!("Settings: defaults ({} not found)", path.display());
    }
    println!("  Extension: .{}", settings.vault.extension);
    println!("  Excluded: {:?}", settings.vault.exclude);
    println!("  Log filter: {}", settings.logging.filter);
    if let Some(dir) = &settings.logging.dir {
        println!("  Log dir: {}", dir.display());
    }
    println!();
    println!("Deleted tags:");
    for tag in deletion_set() {
        println!("  {}", tag);
    }
    println!("Source folders:");
    for (folder, tag) in source_folders() {
        println!("  {} -> {}", folder, tag);
    }

    Ok(())
}
