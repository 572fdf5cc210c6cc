// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use simple_logger::SimpleLogger;
use test_external_check::{KuberhealthyClient, ReportResult, RunConfig};

#[tokio::main]
async fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .with_module_level("test_external_check::collector", LevelFilter::Debug)
        .with_utc_timestamps()
        .init()?;
    info!(
        "test-external-check starting (version {})",
        env!("CARGO_PKG_VERSION")
    );

    let collector =
        KuberhealthyClient::from_env().context("failed to build collector client")?;
    let config =
        RunConfig::from_env(&collector).context("failed to resolve check configuration")?;

    info!(
        "Using kuberhealthy reporting url {}",
        collector.reporting_url().unwrap_or("<unset>")
    );

    // A delivery error is already logged and does not change the exit status.
    if let ReportResult::DeliveryError(_) = test_external_check::run(&config, &collector).await? {
        info!("report attempt finished without delivery");
    }
    Ok(())
}
