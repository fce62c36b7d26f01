//! Logging setup.
//!
//! Library code only emits `tracing` events; binaries call [`init`] once to
//! install a formatting subscriber. `RUST_LOG` takes precedence over the
//! verbosity flag.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for the given verbosity.
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "keylayout_editor=debug"
    } else {
        "keylayout_editor=warn"
    }
}

/// Installs the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let filter = default_filter(verbose);

    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if result.is_err() {
        tracing::trace!("tracing subscriber already installed");
    }
}
