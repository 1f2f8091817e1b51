//! Utils

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Arguments for the basket examples
#[derive(Debug, Parser)]
pub struct ExampleBasketArgs {
    /// Number of items to add to the basket
    #[clap(short, long)]
    pub n: Option<usize>,

    /// Fixture set to use for the basket
    #[clap(short, long, default_value = "groceries")]
    pub fixture: String,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    #[clap(short, long, default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[clap(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TracingError {
    /// The log level could not be parsed as a filter directive.
    #[error("invalid log level: {0}")]
    InvalidLevel(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("tracing subscriber already initialised: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Install a global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` wins over `level` when it is set.
///
/// # Errors
///
/// Returns a [`TracingError`] if `level` is not a valid filter or a subscriber already exists.
pub fn init_tracing(level: &str, format: LogFormat) -> Result<(), TracingError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_err| EnvFilter::try_new(level))?;

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}
