//! Diagnostic logging.
//!
//! Diagnostics go to stderr through `tracing` so stdout stays clean for
//! results and `--json` output. The filter comes from `DOSSIER_LOG`
//! (e.g. `DOSSIER_LOG=debug`) and defaults to `warn`, which is enough to
//! see skipped sources.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "DOSSIER_LOG";

/// Install the global subscriber. `verbose` lowers the default level to `debug`.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .without_time()
        .try_init();
}
