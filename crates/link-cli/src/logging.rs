use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::Result;

/// Install the stderr subscriber.
///
/// `RUST_LOG` selects the filter, defaulting to `warn`. `--verbose` forces
/// `debug`.
pub fn init(verbose: bool) -> Result<()> {
    let filter_layer = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
