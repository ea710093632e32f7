// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use shelfmark::clipboard::{copy_to_clipboard, ClipboardBackend, WebClipboard};
use wasm_bindgen_test::wasm_bindgen_test;

// Runs under node by default, where there is no `window`
#[wasm_bindgen_test]
async fn test_copy_without_window_returns_false() {
    assert!(!copy_to_clipboard(&WebClipboard, "ACC-00042").await);
}

#[wasm_bindgen_test]
async fn test_missing_window_is_reported_as_unavailable() {
    let err = WebClipboard.write_text("x").await.unwrap_err();
    assert!(err.is_clipboard_error());
}
