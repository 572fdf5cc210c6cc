// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! A synthetic external check. It waits a configurable delay, reports either
//! success or a simulated failure to its collector, and is killed by a
//! watchdog if the run deadline passes first.

// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

pub mod collector;
pub mod config;
pub mod dispatch;
pub mod duration;
pub mod errors;
pub mod watchdog;

pub use collector::{Collector, KuberhealthyClient};
pub use config::RunConfig;
pub use dispatch::{Outcome, ReportResult};
pub use errors::{ConfigError, DurationParseError, ReportError, WatchdogError};

/// Arm the process watchdog for the configured budget, then dispatch the
/// report. If the budget runs out first the process exits from under this
/// call.
pub async fn run<C: Collector + ?Sized>(
    config: &RunConfig,
    collector: &C,
) -> Result<ReportResult, WatchdogError> {
    watchdog::arm(config.time_budget)?;
    Ok(dispatch::dispatch(config, collector).await)
}
