// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use shelfmark::clipboard::{copy_to_clipboard, ClipboardBackend};
use shelfmark::ShelfmarkError;
use shelfmark_test_utils::{helpers::elapse, MockClipboard};
use std::time::Duration;

#[tokio::test]
async fn test_copy_success_returns_true() {
    // Arrange
    let clipboard = MockClipboard::accepting();

    // Act
    let copied = copy_to_clipboard(&clipboard, "ACC-00042").await;

    // Assert
    assert!(copied);
    assert_eq!(clipboard.contents().as_deref(), Some("ACC-00042"));
}

#[tokio::test]
async fn test_copy_rejection_returns_false() {
    // Arrange
    let clipboard = MockClipboard::denying("NotAllowedError: Document is not focused");

    // Act
    let copied = copy_to_clipboard(&clipboard, "ACC-00042").await;

    // Assert
    assert!(!copied);
    assert_eq!(clipboard.attempts(), 1);
    assert!(clipboard.contents().is_none());
}

#[tokio::test]
async fn test_copy_unavailable_returns_false() {
    let clipboard = MockClipboard::unavailable("no display server");
    assert!(!copy_to_clipboard(&clipboard, "anything").await);
}

#[tokio::test]
async fn test_copy_empty_text() {
    let clipboard = MockClipboard::accepting();

    assert!(copy_to_clipboard(&clipboard, "").await);
    assert_eq!(clipboard.writes(), vec![String::new()]);
}

#[tokio::test]
async fn test_backend_error_is_typed() {
    // Arrange
    let clipboard = MockClipboard::denying("permission denied");

    // Act
    let result = clipboard.write_text("x").await;

    // Assert
    assert_eq!(
        result,
        Err(ShelfmarkError::clipboard_write("permission denied"))
    );
}

#[tokio::test]
async fn test_copy_through_trait_object() {
    // Arrange
    let clipboard = MockClipboard::accepting();
    let backend: &(dyn ClipboardBackend + Sync) = &clipboard;

    // Act
    let copied = copy_to_clipboard(backend, "9780261103573").await;

    // Assert
    assert!(copied);
    assert_eq!(clipboard.writes(), vec!["9780261103573".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_copies_are_independent() -> anyhow::Result<()> {
    // Arrange
    let slow = MockClipboard::accepting().with_latency(Duration::from_millis(500));
    let fast = MockClipboard::accepting().with_latency(Duration::from_millis(10));

    let slow_clone = slow.clone();
    let slow_copy =
        tokio::spawn(async move { copy_to_clipboard(&slow_clone, "slow").await });

    // Act
    let fast_copied = copy_to_clipboard(&fast, "fast").await;

    // Assert
    assert!(fast_copied);
    assert!(slow.contents().is_none());

    elapse(500).await;
    assert!(slow_copy.await?);
    assert_eq!(slow.contents().as_deref(), Some("slow"));
    Ok(())
}

#[tokio::test]
async fn test_mixed_outcomes_in_sequence() {
    // Arrange
    let accepting = MockClipboard::accepting();
    let denying = MockClipboard::denying("denied");

    // Act
    let outcomes = vec![
        copy_to_clipboard(&accepting, "one").await,
        copy_to_clipboard(&denying, "two").await,
        copy_to_clipboard(&accepting, "three").await,
    ];

    // Assert
    assert_eq!(outcomes, vec![true, false, true]);
    assert_eq!(accepting.writes(), vec!["one", "three"]);
}
