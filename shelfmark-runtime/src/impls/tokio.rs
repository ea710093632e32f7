// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
use std::{sync::Arc, time::Duration};

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
use crate::{runtime::Runtime, timer::Timer};

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
#[derive(Debug)]
pub struct TokioRuntime;

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
impl Runtime for TokioRuntime {
    type Mutex<T: ?Sized> = Arc<parking_lot::Mutex<T>>;
    type Timer = TokioTimer;
}

/// Timer backed by tokio's time driver, so a paused test clock is honoured.
#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }
}
