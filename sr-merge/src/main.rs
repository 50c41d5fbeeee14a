use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sr_merge::{DriverPaths, gitconfig_snippet, run_driver};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "sr-merge",
    about = "Git merge driver that ignores spaced-repetition scheduling comments"
)]
struct Cli {
    /// Common ancestor revision (%O)
    #[arg(required_unless_present = "print_config")]
    ancestor: Option<PathBuf>,

    /// Local revision (%A); overwritten with the merge result
    #[arg(required_unless_present = "print_config")]
    current: Option<PathBuf>,

    /// Incoming revision (%B)
    #[arg(required_unless_present = "print_config")]
    other: Option<PathBuf>,

    /// Print the .gitattributes and git config lines that install this driver
    #[arg(long)]
    print_config: bool,

    /// Driver name used by --print-config
    #[arg(long, default_value = "spaced-repetition")]
    name: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    if cli.print_config {
        print!("{}", gitconfig_snippet(&cli.name, "sr-merge"));
        return Ok(());
    }

    let (Some(ancestor), Some(current), Some(other)) = (cli.ancestor, cli.current, cli.other)
    else {
        anyhow::bail!("expected three paths: <ANCESTOR> <CURRENT> <OTHER>");
    };

    let paths = DriverPaths {
        ancestor,
        current,
        other,
    };
    run_driver(&paths)
        .with_context(|| format!("merge of {} failed", paths.current.display()))?;

    Ok(())
}

/// Diagnostics go to stderr only; git may surface them, stdout stays clean.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("SR_MERGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();
}
