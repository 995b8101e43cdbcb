use std::fs::OpenOptions;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE: &str = "rosgraph-console.log";

/// Logs go to a file so stdout stays clean for command output.
pub fn init_logger(debug: bool) {
    let filter = if debug {
        EnvFilter::new("rosgraph=debug,rosgraph_console=debug")
    } else {
        EnvFilter::new("rosgraph=info,rosgraph_console=info")
    };

    let log_file = match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        Ok(file) => file,
        Err(_) => return, // Silently fail if we can't open the log file
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_writer(log_file)
                .with_ansi(false),
        )
        .init();
}
