//! Logging setup for the command-line binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at `info`, or at
/// `debug` (every assignment) when `verbose` is set. Output goes to stderr
/// so it never mixes with the rendered schedule.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("shift_roster=debug,info")
        } else {
            EnvFilter::new("shift_roster=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
