use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "FLASHVAULT_LOG";
const LOG_FILE_NAME: &str = "flashvault.log";

/// Initialize logging to stderr and, when `log_dir` is set, to a file.
///
/// Stdout is left to the command's own report. Returns a guard that must be
/// held for the lifetime of the application so file logs are flushed.
pub fn init_logging(filter: &str, log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = rolling::never(dir, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(build_filter(filter)?)
        .with(file_layer)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(guard)
}

fn build_filter(filter: &str) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(from_env) => Ok(from_env),
        Err(_) => Ok(EnvFilter::try_new(filter)?),
    }
}
