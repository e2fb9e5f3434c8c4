//! Contains functionality of restart container command
use std::io;

use anyhow::{Context, Result};
use librelaunch::batch;
use librelaunch::{EngineClient, EngineConfig};
use relaunch_cli::Restart;

pub fn restart(args: Restart, host: Option<&str>) -> Result<()> {
    let config = EngineConfig::resolve(host).context("failed to resolve the engine host")?;
    let client = EngineClient::new(config).context("failed to create the engine client")?;

    let mut stdout = io::stdout().lock();
    let result = batch::execute(&args.containers, args.timeout(), &client, &mut stdout);
    tracing::debug!(
        succeeded = result.succeeded.len(),
        failed = result.failures.len(),
        "restart finished"
    );

    result.into_result()?;
    Ok(())
}
