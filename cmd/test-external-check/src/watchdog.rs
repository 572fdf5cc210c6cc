// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::errors::WatchdogError;
use log::{error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Exit status used when the time budget runs out.
pub const TIMEOUT_EXIT_CODE: i32 = 1;

static ARMED: AtomicBool = AtomicBool::new(false);

/// Time left before the watchdog fires. An expired budget is zero.
pub fn remaining(budget: time::Duration) -> Duration {
    Duration::try_from(budget).unwrap_or(Duration::ZERO)
}

/// Spawn a timer task that calls `on_expire` once `budget` has elapsed.
/// There is no way to cancel it short of dropping the runtime.
///
/// Must be called from within a tokio runtime.
pub fn spawn<F>(budget: time::Duration, on_expire: F) -> JoinHandle<()>
where
    F: FnOnce() + Send + 'static,
{
    let wait = remaining(budget);
    tokio::spawn(async move {
        tokio::time::sleep(wait).await;
        error!("Check took too long and timed out.");
        on_expire();
    })
}

/// Arm the process watchdog: once `budget` elapses the process exits with
/// [`TIMEOUT_EXIT_CODE`], whatever else is in flight. Only one watchdog may
/// be armed per process.
pub fn arm(budget: time::Duration) -> Result<(), WatchdogError> {
    if ARMED.swap(true, Ordering::SeqCst) {
        return Err(WatchdogError::AlreadyArmed);
    }
    if budget.is_negative() {
        info!(
            "check deadline passed {}s ago, timing out immediately",
            -budget.whole_seconds()
        );
    } else {
        info!("watchdog armed, check times out in {:?}", remaining(budget));
    }
    spawn(budget, || std::process::exit(TIMEOUT_EXIT_CODE));
    Ok(())
}
