// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::collector::Collector;
use crate::duration::parse_duration;
use crate::errors::{ConfigError, ReportError};
use log::{info, warn};
use std::env;
use std::time::Duration;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub const REPORT_FAILURE_ENV: &str = "REPORT_FAILURE";
pub const REPORT_DELAY_ENV: &str = "REPORT_DELAY";

pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(5);
pub const DEFAULT_TIME_BUDGET: time::Duration = time::Duration::minutes(10);

/// Settings for a single probe run, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Report a failure instead of success.
    pub simulate_failure: bool,
    /// How long to wait before reporting.
    pub initial_delay: Duration,
    /// Remaining time before the watchdog fires. Negative when the deadline
    /// has already passed.
    pub time_budget: time::Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            simulate_failure: false,
            initial_delay: DEFAULT_INITIAL_DELAY,
            time_budget: DEFAULT_TIME_BUDGET,
        }
    }
}

impl RunConfig {
    /// Resolve from the process environment and the collector's deadline.
    pub fn from_env<C: Collector + ?Sized>(collector: &C) -> Result<Self, ConfigError> {
        Self::resolve(|key| env::var(key).ok(), collector, OffsetDateTime::now_utc())
    }

    /// Resolve using `lookup` for environment variables. Empty values count
    /// as unset. Malformed values are errors; missing ones take defaults.
    pub fn resolve<F, C>(lookup: F, collector: &C, now: OffsetDateTime) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
        C: Collector + ?Sized,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let simulate_failure = match lookup(REPORT_FAILURE_ENV) {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool {
                var: REPORT_FAILURE_ENV,
                value,
            })?,
            None => false,
        };

        let initial_delay = match lookup(REPORT_DELAY_ENV) {
            Some(value) => parse_duration(&value).map_err(|source| ConfigError::InvalidDuration {
                var: REPORT_DELAY_ENV,
                source,
            })?,
            None => DEFAULT_INITIAL_DELAY,
        };

        let time_budget = time_budget_from(collector.deadline(), now)?;

        Ok(Self {
            simulate_failure,
            initial_delay,
            time_budget,
        })
    }
}

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// A failed lookup means "no deadline". A value that was found but does not
/// parse is corrupted state and is fatal.
fn time_budget_from(
    deadline: Result<String, ReportError>,
    now: OffsetDateTime,
) -> Result<time::Duration, ConfigError> {
    let raw = match deadline {
        Ok(raw) => raw,
        Err(e) => {
            warn!("There was an issue getting the check deadline: {e}");
            return Ok(DEFAULT_TIME_BUDGET);
        }
    };

    let deadline: i64 = raw
        .parse()
        .map_err(|_| ConfigError::InvalidDeadline { value: raw.clone() })?;
    if deadline <= 0 {
        return Ok(DEFAULT_TIME_BUDGET);
    }

    match OffsetDateTime::from_unix_timestamp(deadline)
        .ok()
        .and_then(|at| at.format(&Rfc3339).ok())
    {
        Some(at) => info!("Parsed check deadline time from the environment: {deadline} ({at})"),
        None => info!("Parsed check deadline time from the environment: {deadline}"),
    }

    Ok(time::Duration::seconds(
        deadline.saturating_sub(now.unix_timestamp()),
    ))
}
