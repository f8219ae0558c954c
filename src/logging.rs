use sleeper_roster::constants::DEFAULT_LOG_DIRECTIVE;
use sleeper_roster::error::AppError;
use std::io::stderr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up logging for the application.
///
/// Log lines go to stderr through a non-blocking writer so stdout carries
/// only the confirmation message. Directives in `RUST_LOG` take precedence;
/// `sleeper_roster=info` applies only when it sets none.
///
/// Returns the guard that must be kept alive for the duration of the program
/// to ensure buffered log lines are flushed.
pub fn setup_logging() -> Result<WorkerGuard, AppError> {
    let (non_blocking, guard) = tracing_appender::non_blocking(stderr());

    let directive: Directive = DEFAULT_LOG_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(
                    EnvFilter::builder()
                        .with_default_directive(directive)
                        .from_env_lossy(),
                ),
        )
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    Ok(guard)
}
