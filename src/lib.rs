pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::config::GeneratorConfig;
pub use crate::core::error::{GeneratorError, GeneratorResult};
pub use crate::core::generator::{generate, generate_with_output, ANNOUNCEMENT};

/// Install the stderr logger. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the binary: generate the launchers for the current
/// directory.
pub fn run() -> GeneratorResult<()> {
    init_logging();

    let config = GeneratorConfig::from_env()?;
    let written = generate(&config)?;
    tracing::debug!("Generated {} launchers", written.len());
    Ok(())
}
