// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use thiserror::Error;

/// Malformed explicit input. Always fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse {var} env var: invalid boolean {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("failed to parse {var} env var: {source}")]
    InvalidDuration {
        var: &'static str,
        #[source]
        source: DurationParseError,
    },

    #[error("failed to parse unix deadline {value:?} from environment")]
    InvalidDeadline { value: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("KH_CHECK_RUN_DEADLINE environment variable is not set")]
    DeadlineUnset,

    #[error("KH_REPORTING_URL environment variable is not set")]
    ReportingUrlUnset,

    #[error("failed to send report: {0}")]
    Request(#[from] reqwest::Error),

    #[error("bad status code from kuberhealthy status reporting url: [{code}] {reason}")]
    BadStatus { code: u16, reason: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WatchdogError {
    #[error("watchdog is already armed for this process")]
    AlreadyArmed,
}
