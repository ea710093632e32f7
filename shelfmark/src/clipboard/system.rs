// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use shelfmark_core::{ClipboardBackend, Result, ShelfmarkError};

/// The desktop clipboard, through `arboard`.
///
/// `arboard` blocks while it talks to the display server, so each write runs
/// on tokio's blocking pool and the calling task only suspends.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

#[async_trait]
impl ClipboardBackend for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || write_blocking(&text))
            .await
            .map_err(|err| ShelfmarkError::clipboard_write(err.to_string()))?
    }
}

fn write_blocking(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|err| ShelfmarkError::clipboard_unavailable(err.to_string()))?;

    clipboard
        .set_text(text)
        .map_err(|err| ShelfmarkError::clipboard_write(err.to_string()))
}
