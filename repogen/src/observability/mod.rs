//! Observability (logging)
//!
//! Structured logging through `tracing`. Logs go to stderr so they never mix
//! with what the CLI prints for the user.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Filter used when `RUST_LOG` is not set
    pub default_filter: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            default_filter: "warn".to_string(),
            json: false,
        }
    }
}

impl ObservabilityConfig {
    /// Create a config with the given fallback filter
    pub fn new(default_filter: impl Into<String>) -> Self {
        Self {
            default_filter: default_filter.into(),
            ..Default::default()
        }
    }

    /// Fallback filter for a verbosity count (`-v`, `-vv`)
    #[must_use]
    pub fn for_verbosity(verbose: u8) -> Self {
        match verbose {
            0 => Self::default(),
            1 => Self::new("info,repogen=debug"),
            _ => Self::new("debug,repogen=trace"),
        }
    }

    /// Enable JSON formatting
    #[must_use]
    pub const fn with_json(mut self) -> Self {
        self.json = true;
        self
    }
}

/// Initialize the logging stack
///
/// `RUST_LOG` takes precedence over the configured fallback filter.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
///
/// # Example
///
/// ```rust,no_run
/// use repogen::observability::{self, ObservabilityConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// observability::init(&ObservabilityConfig::default())?;
/// tracing::info!("generator started");
/// # Ok(())
/// # }
/// ```
pub fn init(
    config: &ObservabilityConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    }
}
