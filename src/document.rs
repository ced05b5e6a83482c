//! Document collaborators.
//!
//! The preview consumes the edited document through the [`Document`] trait:
//! a full-text snapshot, an emptiness check, an optional file path and a
//! path-change notification channel. [`TextDocument`] is the in-memory
//! implementation used by editor buffers and tests.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

/// A document being previewed.
///
/// Implementations are shared between the editor and the preview actor, so
/// all methods take `&self`.
pub trait Document: Send + Sync {
    /// Whether the document currently has no content.
    fn is_empty(&self) -> bool;

    /// Snapshot of the full document text.
    fn text(&self) -> String;

    /// Path of the backing file, if the document has been saved.
    fn file_path(&self) -> Option<PathBuf>;

    /// Subscribe to file path changes.
    ///
    /// The receiver starts with the current path marked as seen and wakes on
    /// every later change.
    fn path_changes(&self) -> watch::Receiver<Option<PathBuf>>;
}

/// In-memory text document.
pub struct TextDocument {
    text: RwLock<String>,
    path_tx: watch::Sender<Option<PathBuf>>,
}

impl TextDocument {
    /// Create an empty, pathless document.
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial content.
    pub fn with_text(text: impl Into<String>) -> Self {
        let (path_tx, _path_rx) = watch::channel(None);
        Self {
            text: RwLock::new(text.into()),
            path_tx,
        }
    }

    /// Replace the document content.
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.write() = text.into();
    }

    /// Set or clear the backing file path.
    ///
    /// Notifies path subscribers only when the path actually changed.
    pub fn set_file_path(&self, path: Option<PathBuf>) {
        self.path_tx.send_if_modified(|current| {
            if *current == path {
                return false;
            }
            *current = path.clone();
            true
        });
    }
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for TextDocument {
    fn is_empty(&self) -> bool {
        self.text.read().is_empty()
    }

    fn text(&self) -> String {
        self.text.read().clone()
    }

    fn file_path(&self) -> Option<PathBuf> {
        self.path_tx.borrow().clone()
    }

    fn path_changes(&self) -> watch::Receiver<Option<PathBuf>> {
        self.path_tx.subscribe()
    }
}

/// Convenience alias for sharing a document with the preview.
pub type SharedDocument = Arc<dyn Document>;

// ============================================================================
// Tests
// ============================================================================
