// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[cfg(all(not(target_arch = "wasm32"), not(feature = "runtime-tokio")))]
compile_error!("shelfmark-core needs the `runtime-tokio` feature on native targets");

#[cfg(all(target_arch = "wasm32", not(feature = "runtime-wasm")))]
compile_error!("shelfmark-core needs the `runtime-wasm` feature on wasm32");

pub mod cancellation_token;
pub mod clipboard_backend;
pub mod error;
pub mod shelfmark_task;

pub use self::cancellation_token::CancellationToken;
pub use self::clipboard_backend::ClipboardBackend;
pub use self::error::{Result, ShelfmarkError};
pub use self::shelfmark_task::ShelfmarkTask;
