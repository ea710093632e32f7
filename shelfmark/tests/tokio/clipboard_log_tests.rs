// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use shelfmark::clipboard::copy_to_clipboard;
use shelfmark_test_utils::MockClipboard;
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

/// Collects the message of every error-level event.
#[derive(Clone, Default)]
struct ErrorLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl ErrorLog {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl Subscriber for ErrorLog {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        if *event.metadata().level() == Level::ERROR {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.messages.lock().push(visitor.0);
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

#[tokio::test]
async fn test_copy_failure_logs_error() {
    // Arrange
    let log = ErrorLog::default();
    let _guard = tracing::subscriber::set_default(log.clone());
    let clipboard = MockClipboard::denying("NotAllowedError: Document is not focused");

    // Act
    let copied = copy_to_clipboard(&clipboard, "ACC-00042").await;

    // Assert
    assert!(!copied);
    let messages = log.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Failed to copy: "), "{messages:?}");
    assert!(messages[0].contains("Document is not focused"), "{messages:?}");
}

#[tokio::test]
async fn test_copy_success_logs_nothing() {
    // Arrange
    let log = ErrorLog::default();
    let _guard = tracing::subscriber::set_default(log.clone());
    let clipboard = MockClipboard::accepting();

    // Act
    let copied = copy_to_clipboard(&clipboard, "ACC-00042").await;

    // Assert
    assert!(copied);
    assert!(log.messages().is_empty());
}
