// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Front-end helpers for the library analytics dashboard.
//!
//! Three independent utilities, each called straight from UI event handlers:
//!
//! - [`debounce`]: collapse bursts of input events into one delayed call
//! - [`date_format`]: render transaction dates as `05 Mar 2024`
//! - [`clipboard`]: copy text, reporting success as a `bool`
//!
//! # Hosts
//!
//! The same code runs natively on tokio (`runtime-tokio`, default) and in the
//! browser (`runtime-wasm` on `wasm32`). The native clipboard needs the
//! `system-clipboard` feature; logging goes through `tracing` when the
//! `tracing` feature is on.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "system-clipboard", not(target_arch = "wasm32")))]
//! # #[tokio::main]
//! # async fn main() {
//! use shelfmark::prelude::*;
//! use std::time::Duration;
//!
//! let on_filter = debounce(|query: String| println!("filter: {query}"), Duration::from_millis(300));
//! on_filter("fiction".to_string());
//!
//! assert_eq!(format_date("2024-03-05"), "05 Mar 2024");
//!
//! if !copy_text("ACC-00042").await {
//!     eprintln!("copy failed");
//! }
//! # }
//! # #[cfg(not(all(feature = "system-clipboard", not(target_arch = "wasm32"))))]
//! # fn main() {}
//! ```

mod logging;

pub mod clipboard;
pub mod date_format;
pub mod debounce;

pub use shelfmark_core::{Result, ShelfmarkError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::clipboard::{copy_to_clipboard, ClipboardBackend};
    pub use crate::date_format::{format_date, try_format_date, INVALID_DATE};
    pub use crate::debounce::{Debouncer, DEFAULT_DEBOUNCE_DELAY};

    #[cfg(any(
        all(feature = "system-clipboard", not(target_arch = "wasm32")),
        all(feature = "runtime-wasm", target_arch = "wasm32")
    ))]
    pub use crate::clipboard::copy_text;

    #[cfg(any(
        all(feature = "runtime-tokio", not(target_arch = "wasm32")),
        all(feature = "runtime-wasm", target_arch = "wasm32")
    ))]
    pub use crate::debounce::debounce;
}
