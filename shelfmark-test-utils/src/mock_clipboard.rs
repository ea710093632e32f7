// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use parking_lot::Mutex;
use shelfmark_core::{ClipboardBackend, Result, ShelfmarkError};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Behaviour {
    Accept,
    Reject(ShelfmarkError),
}

/// In-memory clipboard for tests.
///
/// Accepting clipboards keep every written text; rejecting ones fail every
/// write with the configured error. An optional latency makes overlapping
/// writes observable under a paused tokio clock.
#[derive(Debug, Clone)]
pub struct MockClipboard {
    behaviour: Behaviour,
    latency: Option<Duration>,
    writes: Arc<Mutex<Vec<String>>>,
    attempts: Arc<Mutex<usize>>,
}

impl MockClipboard {
    /// A clipboard that accepts every write.
    pub fn accepting() -> Self {
        Self::with_behaviour(Behaviour::Accept)
    }

    /// A clipboard that refuses writes, as a browser does without permission.
    pub fn denying(reason: impl Into<String>) -> Self {
        Self::with_behaviour(Behaviour::Reject(ShelfmarkError::clipboard_write(reason)))
    }

    /// A clipboard that cannot be opened at all, as in a headless session.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::with_behaviour(Behaviour::Reject(ShelfmarkError::clipboard_unavailable(
            reason,
        )))
    }

    /// Delay every write by `latency` before it settles.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Texts successfully written, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }

    /// The current clipboard contents.
    pub fn contents(&self) -> Option<String> {
        self.writes.lock().last().cloned()
    }

    /// Number of writes attempted, successful or not.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock()
    }

    fn with_behaviour(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            latency: None,
            writes: Arc::new(Mutex::new(Vec::new())),
            attempts: Arc::new(Mutex::new(0)),
        }
    }
}

#[async_trait]
impl ClipboardBackend for MockClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        *self.attempts.lock() += 1;

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        match &self.behaviour {
            Behaviour::Accept => {
                self.writes.lock().push(text.to_owned());
                Ok(())
            }
            Behaviour::Reject(err) => Err(err.clone()),
        }
    }
}
