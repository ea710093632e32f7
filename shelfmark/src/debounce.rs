// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing-edge debouncing of plain function calls.
//!
//! A [`Debouncer`] collapses a burst of calls into a single invocation of the
//! wrapped function, made once the caller has been quiet for the configured
//! delay, with the arguments of the last call in the burst. It is meant for
//! search boxes and filter inputs that would otherwise refetch on every
//! keystroke.
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
//! # #[tokio::main]
//! # async fn main() {
//! use shelfmark::debounce::Debouncer;
//! use shelfmark_runtime::TokioRuntime;
//!
//! let search = Debouncer::<String, TokioRuntime>::new(|query: String| {
//!     println!("searching for {query}");
//! });
//!
//! search.call("h".to_string());
//! search.call("ha".to_string());
//! search.call("harry".to_string()); // only this one runs, 300ms from now
//! # }
//! # #[cfg(not(all(feature = "runtime-tokio", not(target_arch = "wasm32"))))]
//! # fn main() {}
//! ```

use crate::debug;
use core::fmt;
use core::future::Future;
use core::pin::pin;
use futures::future::{select, Either};
use shelfmark_core::{CancellationToken, ShelfmarkTask};
use shelfmark_runtime::{MutexLike, Runtime, Timer};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;
use std::time::Duration;

/// Delay used by [`Debouncer::new`].
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

#[cfg(not(target_arch = "wasm32"))]
type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

// The browser runs everything on one thread, so callbacks may hold DOM handles
#[cfg(target_arch = "wasm32")]
type Callback<A> = Rc<dyn Fn(A)>;

/// Wraps a function so that repeated calls within `delay` of each other run it
/// only once.
///
/// `A` is the whole argument pack: `()` for a function taking nothing, a tuple
/// for several arguments. Anything a method call site would have bound as
/// a receiver is captured by the closure or passed inside `A`.
///
/// The only state is the handle of the pending invocation. Every [`call`]
/// cancels it and schedules a fresh one; the scheduled task clears it when it
/// fires. Dropping the `Debouncer` leaves an already scheduled invocation in
/// place.
///
/// [`call`]: Debouncer::call
pub struct Debouncer<A, R: Runtime> {
    func: Callback<A>,
    delay: Duration,
    timer: R::Timer,
    pending: R::Mutex<Option<ShelfmarkTask>>,
}

impl<A, R: Runtime> Debouncer<A, R> {
    /// The quiet period required before the wrapped function runs.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether an invocation is scheduled and has not fired yet.
    pub fn has_pending(&self) -> bool {
        self.pending.lock().is_some()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<A, R> Debouncer<A, R>
where
    A: Send + 'static,
    R: Runtime,
    R::Mutex<Option<ShelfmarkTask>>: Send + 'static,
    <R::Timer as Timer>::Sleep: Send + 'static,
{
    /// Wrap `func` with the default 300ms delay.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::with_delay(func, DEFAULT_DEBOUNCE_DELAY)
    }

    /// Wrap `func` with an explicit delay.
    pub fn with_delay<F>(func: F, delay: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            delay,
            timer: Default::default(),
            pending: <R::Mutex<Option<ShelfmarkTask>> as MutexLike<_>>::new(None),
        }
    }

    /// Schedule `func(args)` for `delay` from now, cancelling whatever was
    /// scheduled before. Returns immediately.
    pub fn call(&self, args: A) {
        // The deadline is fixed here, not when the executor first polls the task
        let sleep = self.timer.sleep_future(self.delay);
        let func = self.func.clone();
        let slot = self.pending.clone();

        // Hold the slot across spawn so a fast timer cannot observe the old task
        let mut pending = self.pending.lock();
        let task = ShelfmarkTask::spawn(move |cancel| fire_after(sleep, cancel, slot, func, args));
        if let Some(previous) = pending.replace(task) {
            debug!("debounce: superseding pending call");
            previous.cancel();
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl<A, R> Debouncer<A, R>
where
    A: 'static,
    R: Runtime,
    R::Mutex<Option<ShelfmarkTask>>: 'static,
    <R::Timer as Timer>::Sleep: 'static,
{
    /// Wrap `func` with the default 300ms delay.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(A) + 'static,
    {
        Self::with_delay(func, DEFAULT_DEBOUNCE_DELAY)
    }

    /// Wrap `func` with an explicit delay.
    pub fn with_delay<F>(func: F, delay: Duration) -> Self
    where
        F: Fn(A) + 'static,
    {
        Self {
            func: Rc::new(func),
            delay,
            timer: Default::default(),
            pending: <R::Mutex<Option<ShelfmarkTask>> as MutexLike<_>>::new(None),
        }
    }

    /// Schedule `func(args)` for `delay` from now, cancelling whatever was
    /// scheduled before. Returns immediately.
    pub fn call(&self, args: A) {
        let sleep = self.timer.sleep_future(self.delay);
        let func = self.func.clone();
        let slot = self.pending.clone();

        let mut pending = self.pending.lock();
        let task = ShelfmarkTask::spawn(move |cancel| fire_after(sleep, cancel, slot, func, args));
        if let Some(previous) = pending.replace(task) {
            debug!("debounce: superseding pending call");
            previous.cancel();
        }
    }
}

impl<A, R: Runtime> fmt::Debug for Debouncer<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.pending.lock().is_some())
            .finish_non_exhaustive()
    }
}

async fn fire_after<A, S, M>(
    sleep: S,
    cancel: CancellationToken,
    slot: M,
    func: Callback<A>,
    args: A,
) where
    S: Future<Output = ()>,
    M: MutexLike<Option<ShelfmarkTask>>,
{
    let sleep = pin!(sleep);
    let cancelled = pin!(cancel.cancelled());
    if let Either::Left(_) = select(cancelled, sleep).await {
        return;
    }

    // A superseding call may have won the race for the slot after the sleep
    // completed; the token is only trusted under the lock.
    let fire = {
        let mut pending = slot.lock();
        if cancel.is_cancelled() {
            false
        } else {
            pending.take();
            true
        }
    };

    // The lock is released here so that `func` may call the debouncer again
    if fire {
        func(args);
    }
}

/// Closure form of [`Debouncer`] over the host's default runtime.
///
/// ```rust,no_run
/// # #[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
/// # #[tokio::main]
/// # async fn main() {
/// use shelfmark::debounce::{debounce, DEFAULT_DEBOUNCE_DELAY};
///
/// let on_resize = debounce(|(w, h): (u32, u32)| println!("{w}x{h}"), DEFAULT_DEBOUNCE_DELAY);
/// on_resize((800, 600));
/// on_resize((1024, 768));
/// # }
/// # #[cfg(not(all(feature = "runtime-tokio", not(target_arch = "wasm32"))))]
/// # fn main() {}
/// ```
#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub fn debounce<A, F>(func: F, delay: Duration) -> impl Fn(A) + Send + Sync + 'static
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let debouncer = Debouncer::<A, shelfmark_runtime::DefaultRuntime>::with_delay(func, delay);
    move |args| debouncer.call(args)
}

/// Closure form of [`Debouncer`] over the host's default runtime.
#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub fn debounce<A, F>(func: F, delay: Duration) -> impl Fn(A) + 'static
where
    A: 'static,
    F: Fn(A) + 'static,
{
    let debouncer = Debouncer::<A, shelfmark_runtime::DefaultRuntime>::with_delay(func, delay);
    move |args| debouncer.call(args)
}
