//! Diagnostics on stderr, so stdout stays reserved for calendar output.

use tracing_subscriber::EnvFilter;

/// Crates whose events are shown; dependencies stay quiet unless `RUST_LOG` asks.
const LOG_TARGETS: &[&str] = &["weekpager", "weekpager_core"];

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directives for `-v` repeated `verbosity` times.
fn directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. `RUST_LOG`, when set, replaces the `-v` level.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 3)
        .without_time()
        .init();
}
