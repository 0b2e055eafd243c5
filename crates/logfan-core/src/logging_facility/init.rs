//! Host subscriber initialization

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Output profile of the host subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable, `logfan=debug` unless `RUST_LOG` says otherwise
    Development,
    /// JSON lines, `logfan=info` unless `RUST_LOG` says otherwise
    Production,
    /// Bare registry; tests install a capture layer instead
    Test,
}

impl Profile {
    fn default_directive(self) -> &'static str {
        match self {
            Profile::Development => "logfan=debug",
            Profile::Production | Profile::Test => "logfan=info",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the global `tracing` subscriber for `profile`.
///
/// Only the first call has an effect. If the host already installed a
/// global subscriber, `try_init` leaves it in place.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = || {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()))
        };
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
    });
}
