// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Host abstraction for the shelfmark utilities.
//!
//! The browser exposes `setTimeout` and a single JS thread; a native tool runs on
//! tokio. Both are described here by the same three traits:
//!
//! - [`timer::Timer`]: deferred wake-ups, cancelled by dropping
//! - [`mutex::MutexLike`]: the lock guarding per-instance state
//! - [`runtime::Runtime`]: ties a timer and a lock family together
//!
//! Exactly one host is selected through the `runtime-tokio` or `runtime-wasm`
//! feature and exported as [`DefaultRuntime`].

pub mod impls;
pub mod mutex;
pub mod runtime;
pub mod timer;

pub use self::mutex::MutexLike;
pub use self::runtime::Runtime;
pub use self::timer::Timer;

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub use self::impls::tokio::{TokioRuntime, TokioTimer};

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub use self::impls::wasm::{WasmRuntime, WasmTimer};

/// Runtime picked by the enabled host feature.
#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub type DefaultRuntime = TokioRuntime;

/// Runtime picked by the enabled host feature.
#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub type DefaultRuntime = WasmRuntime;
