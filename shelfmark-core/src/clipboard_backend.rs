// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Result;
use async_trait::async_trait;

/// The host's system clipboard facility.
///
/// Writes are asynchronous and may be refused (permission prompts, headless
/// sessions, insecure browser contexts). Implementations report refusals as
/// [`ShelfmarkError::ClipboardUnavailable`](crate::ShelfmarkError::ClipboardUnavailable)
/// or [`ShelfmarkError::ClipboardWrite`](crate::ShelfmarkError::ClipboardWrite)
/// and must not panic.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ClipboardBackend {
    /// Replace the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> Result<()>;
}

