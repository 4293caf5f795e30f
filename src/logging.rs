use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var holding an `EnvFilter` directive that overrides `--verbose`.
pub const LOG_ENV: &str = "KTCHECK_LOG";

/// Default directive for the given verbosity.
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "ktcheck=debug" } else { "ktcheck=warn" }
}

/// Install a stderr fmt subscriber. Stdout is reserved for ktlint's report.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
