// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Host-agnostic task spawning with cooperative cancellation.

use crate::CancellationToken;
use core::future::Future;

/// Handle to a spawned background task, cancelled on drop.
///
/// The task receives a [`CancellationToken`] and is expected to stop at its
/// next checkpoint once the token fires. Dropping or calling [`cancel`] on the
/// handle fires the token; neither waits for the task to finish.
///
/// # Host support
///
/// - **tokio**: `tokio::spawn` (feature `runtime-tokio`, default)
/// - **browser**: `wasm_bindgen_futures::spawn_local` (feature `runtime-wasm`)
///
/// # Example
///
/// ```rust
/// use shelfmark_core::ShelfmarkTask;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let task = ShelfmarkTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// assert!(!task.is_cancelled());
/// drop(task);
/// # }
/// ```
///
/// [`cancel`]: ShelfmarkTask::cancel
#[derive(Debug)]
pub struct ShelfmarkTask {
    cancel: CancellationToken,
}

impl ShelfmarkTask {
    /// Spawn a background task with cancellation support.
    ///
    /// `f` runs synchronously inside `spawn`; only the future it returns is
    /// handed to the executor.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        tokio::spawn(f(cancel.clone()));

        Self { cancel }
    }

    /// Spawn a background task with cancellation support (browser version,
    /// no `Send` bounds since everything runs on the JS thread).
    #[cfg(target_arch = "wasm32")]
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let cancel = CancellationToken::new();
        wasm_bindgen_futures::spawn_local(f(cancel.clone()));

        Self { cancel }
    }

    /// Signal the task to stop. Does not wait for it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ShelfmarkTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
