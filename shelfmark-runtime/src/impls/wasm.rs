// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
use std::{sync::Arc, time::Duration};

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
use crate::{runtime::Runtime, timer::Timer};

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
#[derive(Debug)]
pub struct WasmRuntime;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
impl Runtime for WasmRuntime {
    type Mutex<T: ?Sized> = Arc<parking_lot::Mutex<T>>;
    type Timer = WasmTimer;
}

/// `setTimeout`-backed timer.
#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct WasmTimer;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
impl Timer for WasmTimer {
    type Sleep = gloo_timers::future::TimeoutFuture;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        // setTimeout takes a u32 millisecond count
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis)
    }
}
