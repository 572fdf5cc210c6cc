// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::collector::Collector;
use crate::config::RunConfig;
use log::{error, info};
use std::fmt;

/// Message reported when a failure is simulated.
pub const FAILURE_MESSAGE: &str = "Test has failed!";

/// What the probe intends to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    SimulatedFailure,
}

impl From<&RunConfig> for Outcome {
    fn from(config: &RunConfig) -> Self {
        if config.simulate_failure {
            Outcome::SimulatedFailure
        } else {
            Outcome::Success
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "success"),
            Outcome::SimulatedFailure => write!(f, "failure"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportResult {
    Delivered,
    DeliveryError(String),
}

/// Wait the initial delay, then make exactly one report attempt.
/// Delivery errors are logged and returned, never retried.
pub async fn dispatch<C: Collector + ?Sized>(config: &RunConfig, collector: &C) -> ReportResult {
    info!("Waiting {:?} before reporting...", config.initial_delay);
    tokio::time::sleep(config.initial_delay).await;

    let outcome = Outcome::from(config);
    info!("Reporting {outcome}...");
    let result = match outcome {
        Outcome::Success => collector.report_success().await,
        Outcome::SimulatedFailure => {
            collector
                .report_failure(&[FAILURE_MESSAGE.to_string()])
                .await
        }
    };

    match result {
        Ok(()) => {
            info!("Successfully reported to Kuberhealthy servers");
            ReportResult::Delivered
        }
        Err(e) => {
            error!("Error reporting to Kuberhealthy servers: {e}");
            ReportResult::DeliveryError(e.to_string())
        }
    }
}
