// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::time::sleep;

/// Let `millis` of virtual time pass.
///
/// Meant for `#[tokio::test(start_paused = true)]`: while the test task sleeps
/// the clock auto-advances through every earlier timer, so tasks scheduled to
/// fire before the returned instant have run by the time this resolves.
pub async fn elapse(millis: u64) {
    sleep(Duration::from_millis(millis)).await;
}
