//! Subscriber installation for hosts that want tailsort's logs on stderr.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "TAILSORT_LOG";

/// Directives used when `TAILSORT_LOG` is unset or does not parse.
pub const DEFAULT_DIRECTIVES: &str = "tailsort_core=info,tailsort_analysis=info";

static INIT: Once = Once::new();

/// Filter built from `TAILSORT_LOG`, e.g.
/// `TAILSORT_LOG=tailsort_analysis::oracle=debug`.
pub fn env_filter() -> EnvFilter {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(DEFAULT_DIRECTIVES),
    }
}

/// Install a compact stderr subscriber filtered by [`env_filter`].
///
/// Span positions are omitted: diagnostics already carry file, line and
/// column. Only the first call has an effect, and a subscriber the host
/// installed first is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter())
            .try_init();
        if installed.is_err() {
            tracing::debug!("a global subscriber is already set; tailsort logging left to the host");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_env_or_default() {
        std::env::set_var(LOG_ENV, "tailsort_analysis::oracle=debug");
        assert_eq!(env_filter().to_string(), "tailsort_analysis::oracle=debug");

        std::env::set_var(LOG_ENV, "tailsort_core=loud");
        assert_eq!(env_filter().to_string(), EnvFilter::new(DEFAULT_DIRECTIVES).to_string());

        std::env::remove_var(LOG_ENV);
        assert_eq!(env_filter().to_string(), EnvFilter::new(DEFAULT_DIRECTIVES).to_string());
    }

    #[test]
    fn test_init_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::info!("still logging");
    }
}
