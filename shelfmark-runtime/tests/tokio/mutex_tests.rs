// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use shelfmark_runtime::{MutexLike, Runtime, TokioRuntime};

type Cell<T> = <TokioRuntime as Runtime>::Mutex<T>;

#[test]
fn test_clones_share_state() {
    // Arrange
    let cell: Cell<Option<u32>> = MutexLike::new(None);
    let other = cell.clone();

    // Act
    *other.lock() = Some(7);

    // Assert
    assert_eq!(*cell.lock(), Some(7));
}

#[test]
fn test_take_clears_slot() {
    // Arrange
    let cell: Cell<Option<&str>> = MutexLike::new(Some("pending"));

    // Act
    let taken = cell.lock().take();

    // Assert
    assert_eq!(taken, Some("pending"));
    assert!(cell.lock().is_none());
}
