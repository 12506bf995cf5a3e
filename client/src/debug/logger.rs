//! Logging initialization

use crate::config::ClientConfig;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "copmi_client=info,warn";

/// Initialize the logging system
///
/// Sets up:
/// - A compact stderr layer filtered by `RUST_LOG` (or `debug` when `verbose`)
/// - When `log_dir` is configured, a daily-rotated `copmi-client.log` file
///   without ANSI codes, with file/line information
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// lifetime of the program.
pub fn init(config: &ClientConfig, verbose: bool) -> Option<WorkerGuard> {
    let default_filter = if verbose { "copmi_client=debug,info" } else { DEFAULT_FILTER };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact();

    let (file_layer, guard) = match &config.log_dir {
        Some(log_dir) => match fs::create_dir_all(log_dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(log_dir, "copmi-client.log");
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .boxed();
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Warning: Failed to create log directory: {}", e);
                (None, None)
            }
        },
        None => (None, None),
    };

    let initialized = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    if initialized.is_err() {
        // A subscriber is already installed (tests, embedding application)
        return guard;
    }

    tracing::debug!(
        api_url = %config.api_url,
        session_file = ?config.session_file,
        log_dir = ?config.log_dir,
        "Logging initialized"
    );

    guard
}
