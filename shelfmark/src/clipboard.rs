// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! "Copy to clipboard" buttons.
//!
//! A copy is allowed to fail (no permission, headless session, insecure page).
//! [`copy_to_clipboard`] logs the failure and reports it as `false`, so the UI
//! can show a "copy failed" hint; nothing here returns an error or panics.

pub use shelfmark_core::ClipboardBackend;

#[cfg(all(feature = "system-clipboard", not(target_arch = "wasm32")))]
mod system;
#[cfg(all(feature = "system-clipboard", not(target_arch = "wasm32")))]
pub use self::system::SystemClipboard;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
mod web;
#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub use self::web::WebClipboard;

/// Clipboard of the host selected at compile time.
#[cfg(all(feature = "system-clipboard", not(target_arch = "wasm32")))]
pub type DefaultClipboard = SystemClipboard;

/// Clipboard of the host selected at compile time.
#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub type DefaultClipboard = WebClipboard;

/// Write `text` to `clipboard`, returning whether the write succeeded.
///
/// Failures are logged at error level and never propagated. Concurrent calls
/// do not wait on each other.
pub async fn copy_to_clipboard<C>(clipboard: &C, text: &str) -> bool
where
    C: ClipboardBackend + ?Sized,
{
    match clipboard.write_text(text).await {
        Ok(()) => true,
        Err(err) => {
            crate::error!("Failed to copy: {}", err);
            false
        }
    }
}

/// [`copy_to_clipboard`] against the host's [`DefaultClipboard`].
#[cfg(any(
    all(feature = "system-clipboard", not(target_arch = "wasm32")),
    all(feature = "runtime-wasm", target_arch = "wasm32")
))]
pub async fn copy_text(text: &str) -> bool {
    copy_to_clipboard(&DefaultClipboard::default(), text).await
}
