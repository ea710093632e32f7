// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::FutureExt;
use shelfmark_runtime::{DefaultRuntime, Runtime, Timer, TokioTimer};
use std::time::Duration;
use tokio::time::advance;

#[tokio::test(start_paused = true)]
async fn test_sleep_deadline_is_fixed_at_creation() {
    // Arrange
    let timer = TokioTimer;
    let sleep = timer.sleep_future(Duration::from_millis(300));

    // Act
    advance(Duration::from_millis(300)).await;

    // Assert
    assert!(sleep.now_or_never().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_sleep_not_ready_before_deadline() {
    // Arrange
    let timer = TokioTimer;
    let sleep = timer.sleep_future(Duration::from_millis(300));

    // Act
    advance(Duration::from_millis(299)).await;

    // Assert
    assert!(sleep.now_or_never().is_none());
}

#[test]
fn test_default_runtime_timer_is_tokio() {
    let timer = <DefaultRuntime as Runtime>::Timer::default();
    assert_eq!(format!("{timer:?}"), "TokioTimer");
}
