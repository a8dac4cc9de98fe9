//! Ferry bridge entry point.

mod logging;
mod replay;

use std::{env, path::Path, sync::Arc};

use anyhow::{Context, bail};
use ferry_core::FerryConfig;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;

const CONFIG_PATH: &str = "config/ferry.json5";

const USAGE: &str = "usage: ferry replay <capture.json5>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = FerryConfig::load_or_create(Path::new(CONFIG_PATH))
        .with_context(|| format!("loading {CONFIG_PATH}"))?;
    logging::init(&config.log_filter)?;

    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        Some("replay") => {
            let path = args.next().context(USAGE)?;
            replay(Path::new(&path), Arc::new(config)).await
        }
        Some(other) => bail!("unknown command `{other}`\n{USAGE}"),
        None => {
            println!("{USAGE}");
            Ok(())
        }
    }
}

async fn replay(path: &Path, config: Arc<FerryConfig>) -> anyhow::Result<()> {
    let cancel_token = CancellationToken::new();

    let shutdown = cancel_token.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            info!("Interrupted, stopping replay");
            shutdown.cancel();
        }
    });

    let output = replay::run(path, config, cancel_token).await?;

    for packet in &output.java {
        info!(target: "ferry::java", "{packet:?}");
    }
    for packet in &output.bedrock {
        info!(target: "ferry::bedrock", "{packet:?}");
    }
    info!(
        "{} packets to the server, {} to the client",
        output.java.len(),
        output.bedrock.len()
    );
    Ok(())
}
