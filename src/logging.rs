//! Log output setup for the command line binary.

use std::io;

use clap::ValueEnum;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, human friendly output.
    Pretty,
    /// One line per event.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Maps the number of `-v` flags to a level.
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `verbosity` when it is set.
pub fn init(verbosity: u8, format: LogFormat) {
    let filter = EnvFilter::builder().with_default_directive(level_for(verbosity).into())
                                     .from_env_lossy();

    let layer = match format {
        LogFormat::Pretty => fmt::layer().pretty()
                                         .with_target(true)
                                         .with_writer(io::stderr)
                                         .boxed(),
        LogFormat::Compact => fmt::layer().compact()
                                          .with_target(true)
                                          .without_time()
                                          .with_writer(io::stderr)
                                          .boxed(),
        LogFormat::Json => fmt::layer().json()
                                       .with_target(true)
                                       .with_writer(io::stderr)
                                       .boxed(),
    };

    tracing_subscriber::registry().with(layer.with_filter(filter))
                                  .init();
}
