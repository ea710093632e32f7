// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the shelfmark workspace.
//!
//! - [`CallRecorder`]: a callback that remembers every argument pack it saw
//! - [`MockClipboard`]: a [`ClipboardBackend`](shelfmark_core::ClipboardBackend)
//!   that records writes or rejects them on demand
//! - [`helpers`]: paused-clock helpers for tokio tests
//!
//! Not intended for production code.

pub mod call_recorder;
pub mod helpers;
pub mod mock_clipboard;

pub use self::call_recorder::CallRecorder;
pub use self::mock_clipboard::MockClipboard;
