use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber and routes `log` records from the library
/// crates into it.
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn init(default_filter: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("a global subscriber is already installed")?;
    tracing_log::LogTracer::init().context("a global logger is already installed")?;
    Ok(())
}
