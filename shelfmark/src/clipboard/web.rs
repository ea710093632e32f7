// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use shelfmark_core::{ClipboardBackend, Result, ShelfmarkError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// `navigator.clipboard` of the current page.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebClipboard;

#[async_trait(?Send)]
impl ClipboardBackend for WebClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let clipboard = navigator_clipboard()?;

        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ShelfmarkError::clipboard_write(describe(&err)))
    }
}

// `navigator.clipboard` is undefined outside secure contexts; calling into it
// would throw instead of rejecting.
fn navigator_clipboard() -> Result<web_sys::Clipboard> {
    let window =
        web_sys::window().ok_or_else(|| ShelfmarkError::clipboard_unavailable("no window"))?;
    let navigator = window.navigator();

    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|err| ShelfmarkError::clipboard_unavailable(describe(&err)))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ShelfmarkError::clipboard_unavailable(
            "navigator.clipboard is not available in this context",
        ));
    }

    Ok(clipboard.unchecked_into())
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
