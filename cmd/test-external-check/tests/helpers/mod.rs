// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

#![allow(dead_code)]

use std::process::ExitStatus;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::process::Command;

const RUN_TIMEOUT: Duration = Duration::from_secs(30);

const CHECK_ENV_VARS: &[&str] = &[
    "REPORT_FAILURE",
    "REPORT_DELAY",
    "KH_REPORTING_URL",
    "KH_RUN_UUID",
    "KH_CHECK_RUN_DEADLINE",
];

/// Result of one run of the check binary.
pub struct CheckRun {
    pub status: ExitStatus,
    pub elapsed: Duration,
    output: String,
}

impl CheckRun {
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Whether any stdout or stderr line contains `pattern`.
    pub fn logged(&self, pattern: &str) -> bool {
        self.output.lines().any(|l| l.contains(pattern))
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

/// Run the check binary with only the given check variables set, and wait
/// for it to exit.
pub async fn run_check(vars: &[(&str, &str)]) -> CheckRun {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_test-external-check"));
    for var in CHECK_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.envs(vars.iter().copied()).kill_on_drop(true);

    let start = std::time::Instant::now();
    let out = tokio::time::timeout(RUN_TIMEOUT, cmd.output())
        .await
        .expect("check did not exit in time")
        .expect("failed to run test-external-check");
    let elapsed = start.elapsed();

    let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
    output.push_str(&String::from_utf8_lossy(&out.stderr));
    eprintln!("[check] {output}");

    CheckRun {
        status: out.status,
        elapsed,
        output,
    }
}

/// Unix timestamp `offset_secs` from now, as the collector would hand it out.
pub fn deadline_from_now(offset_secs: i64) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before unix epoch")
        .as_secs() as i64;
    (now + offset_secs).to_string()
}
