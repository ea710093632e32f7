// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;

/// Records the arguments of every invocation of the callback it hands out.
///
/// ```
/// use shelfmark_test_utils::CallRecorder;
///
/// let recorder = CallRecorder::new();
/// let callback = recorder.callback();
///
/// callback("isbn-1");
/// callback("isbn-2");
///
/// assert_eq!(recorder.calls(), vec!["isbn-1", "isbn-2"]);
/// ```
#[derive(Debug)]
pub struct CallRecorder<A> {
    calls: Arc<Mutex<Vec<A>>>,
}

impl<A> CallRecorder<A> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A callback that appends its argument to this recorder.
    pub fn callback(&self) -> impl Fn(A) + Send + Sync + 'static
    where
        A: Send + 'static,
    {
        let calls = Arc::clone(&self.calls);
        move |args| calls.lock().push(args)
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Snapshot of the recorded argument packs, oldest first.
    pub fn calls(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.calls.lock().clone()
    }
}

impl<A> Clone for CallRecorder<A> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<A> Default for CallRecorder<A> {
    fn default() -> Self {
        Self::new()
    }
}
