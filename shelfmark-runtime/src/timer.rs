// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;
use core::time::Duration;

/// The host's timer-scheduling facility.
///
/// `sleep_future` stands in for `schedule(callback, delay)`: the returned future
/// completes once `duration` has elapsed, measured from the moment it was
/// created. Cancelling a scheduled callback is dropping the future.
pub trait Timer: Clone + Send + Sync + Debug + Default + 'static {
    type Sleep: Future<Output = ()>;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep;
}
