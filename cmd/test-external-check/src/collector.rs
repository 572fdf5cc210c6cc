// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Client side of the external check reporting protocol.
//!
//! A check reports exactly one result per run by POSTing a JSON document to
//! the URL handed to it in `KH_REPORTING_URL`, tagged with the run UUID from
//! `KH_RUN_UUID`. The collector also hands out the run deadline through
//! `KH_CHECK_RUN_DEADLINE`.

use crate::errors::ReportError;
use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use serde::Serialize;
use std::env;

pub const REPORTING_URL_ENV: &str = "KH_REPORTING_URL";
pub const RUN_UUID_ENV: &str = "KH_RUN_UUID";
pub const DEADLINE_ENV: &str = "KH_CHECK_RUN_DEADLINE";

const RUN_UUID_HEADER: &str = "kh-run-uuid";

/// The reporting operations a check can perform against its collector.
#[async_trait]
pub trait Collector: Send + Sync {
    /// Raw deadline value as handed out by the collector. Best effort.
    fn deadline(&self) -> Result<String, ReportError>;

    async fn report_success(&self) -> Result<(), ReportError>;

    async fn report_failure(&self, messages: &[String]) -> Result<(), ReportError>;
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    #[serde(rename = "Errors")]
    errors: &'a [String],
    #[serde(rename = "OK")]
    ok: bool,
}

/// HTTP collector client. Sends one request per report and never retries.
#[derive(Debug)]
pub struct KuberhealthyClient {
    http: reqwest::Client,
    reporting_url: Option<String>,
    run_uuid: String,
    deadline: Option<String>,
}

impl KuberhealthyClient {
    pub fn new(
        reporting_url: Option<String>,
        run_uuid: String,
        deadline: Option<String>,
    ) -> Result<Self, ReportError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            reporting_url: reporting_url.filter(|u| !u.is_empty()),
            run_uuid,
            deadline: deadline.filter(|d| !d.is_empty()),
        })
    }

    pub fn from_env() -> Result<Self, ReportError> {
        Self::new(
            env::var(REPORTING_URL_ENV).ok(),
            env::var(RUN_UUID_ENV).unwrap_or_default(),
            env::var(DEADLINE_ENV).ok(),
        )
    }

    pub fn reporting_url(&self) -> Option<&str> {
        self.reporting_url.as_deref()
    }

    async fn send(&self, report: Report<'_>) -> Result<(), ReportError> {
        let url = self
            .reporting_url
            .as_deref()
            .ok_or(ReportError::ReportingUrlUnset)?;

        debug!(
            "sending report to {url} (run uuid {:?}): ok={} errors={:?}",
            self.run_uuid, report.ok, report.errors
        );
        let response = self
            .http
            .post(url)
            .header(RUN_UUID_HEADER, &self.run_uuid)
            .json(&report)
            .send()
            .await?;

        let status = response.status();
        debug!("got a result from the collector: {status}");
        if status != StatusCode::OK {
            return Err(ReportError::BadStatus {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Collector for KuberhealthyClient {
    fn deadline(&self) -> Result<String, ReportError> {
        self.deadline.clone().ok_or(ReportError::DeadlineUnset)
    }

    async fn report_success(&self) -> Result<(), ReportError> {
        self.send(Report {
            errors: &[],
            ok: true,
        })
        .await
    }

    async fn report_failure(&self, messages: &[String]) -> Result<(), ReportError> {
        self.send(Report {
            errors: messages,
            ok: false,
        })
        .await
    }
}
