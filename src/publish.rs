//! Content Publication - Named Observable Values
//!
//! The rendered markup and the stylesheet are published to the display
//! surface as independently observable named text values. Change
//! notifications are edge-triggered: storing a value equal to the current
//! one notifies nobody. A subscriber attaching after a value was set reads
//! the current value immediately and receives all future changes.
//!
//! The registry is transport-agnostic; the display surface's embedded
//! script environment is one consumer, tests are another.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rustc_hash::FxHashMap;
use tokio::sync::watch;

/// Name of the stylesheet value.
pub const STYLESHEET: &str = "stylesheet";

/// Name of the rendered content value.
pub const LIVE_PREVIEW_CONTENT: &str = "livepreviewcontent";

// ============================================================================
// Observed Text
// ============================================================================

/// A single observable text value.
pub struct ObservedText {
    tx: watch::Sender<Arc<str>>,
}

impl ObservedText {
    /// Create a value with initial text.
    pub fn new(initial: &str) -> Self {
        let (tx, _rx) = watch::channel::<Arc<str>>(Arc::from(initial));
        Self { tx }
    }

    /// Store a new value.
    ///
    /// Returns true and notifies subscribers only when the stored text
    /// actually changed.
    pub fn set(&self, value: &str) -> bool {
        self.tx.send_if_modified(|current| {
            if current.as_ref() == value {
                return false;
            }
            *current = Arc::from(value);
            true
        })
    }

    /// Current text.
    pub fn text(&self) -> Arc<str> {
        self.tx.borrow().clone()
    }

    /// Subscribe to changes.
    ///
    /// The receiver starts with the current value marked as seen; read it
    /// through [`watch::Receiver::borrow`] for late-join consistency.
    pub fn subscribe(&self) -> watch::Receiver<Arc<str>> {
        self.tx.subscribe()
    }
}

// ============================================================================
// Publication Registry
// ============================================================================

/// Registry of the named values published to the display surface.
///
/// Created with [`STYLESHEET`] and [`LIVE_PREVIEW_CONTENT`] registered;
/// additional values can be registered before the registry is shared.
pub struct Publication {
    values: FxHashMap<&'static str, ObservedText>,
    publish_count: AtomicU64,
}

impl Publication {
    pub fn new() -> Self {
        let mut values = FxHashMap::default();
        values.insert(STYLESHEET, ObservedText::new(""));
        values.insert(LIVE_PREVIEW_CONTENT, ObservedText::new(""));
        Self {
            values,
            publish_count: AtomicU64::new(0),
        }
    }

    /// Register an additional named value.
    pub fn register(&mut self, name: &'static str) {
        self.values.entry(name).or_insert_with(|| ObservedText::new(""));
    }

    /// Look up a named value.
    pub fn value(&self, name: &str) -> Option<&ObservedText> {
        self.values.get(name)
    }

    /// Store `text` under `name`.
    ///
    /// Returns true when the value changed and subscribers were notified;
    /// false for unchanged values and unknown names.
    pub fn set(&self, name: &str, text: &str) -> bool {
        let Some(value) = self.values.get(name) else {
            return false;
        };
        let changed = value.set(text);
        if changed {
            self.publish_count.fetch_add(1, Ordering::Relaxed);
        }
        changed
    }

    /// Publish rendered content.
    pub fn set_content(&self, markup: &str) -> bool {
        self.set(LIVE_PREVIEW_CONTENT, markup)
    }

    /// Publish the stylesheet.
    pub fn set_stylesheet(&self, css: &str) -> bool {
        self.set(STYLESHEET, css)
    }

    /// Current rendered content.
    pub fn content(&self) -> Arc<str> {
        self.text(LIVE_PREVIEW_CONTENT)
    }

    /// Current stylesheet.
    pub fn stylesheet(&self) -> Arc<str> {
        self.text(STYLESHEET)
    }

    /// Subscribe to rendered content changes.
    pub fn subscribe_content(&self) -> Option<watch::Receiver<Arc<str>>> {
        self.value(LIVE_PREVIEW_CONTENT).map(ObservedText::subscribe)
    }

    /// Subscribe to stylesheet changes.
    pub fn subscribe_stylesheet(&self) -> Option<watch::Receiver<Arc<str>>> {
        self.value(STYLESHEET).map(ObservedText::subscribe)
    }

    /// Number of effective publications since creation (diagnostics).
    pub fn publish_count(&self) -> u64 {
        self.publish_count.load(Ordering::Relaxed)
    }

    fn text(&self, name: &str) -> Arc<str> {
        self.value(name)
            .map(ObservedText::text)
            .unwrap_or_else(|| Arc::from(""))
    }
}

impl Default for Publication {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_is_edge_triggered() {
        let value = ObservedText::new("");
        let mut rx = value.subscribe();

        assert!(value.set("a"));
        assert!(rx.has_changed().unwrap());
        rx.mark_unchanged();

        // Identical consecutive value must not re-notify.
        assert!(!value.set("a"));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_late_subscriber_reads_current_value() {
        let value = ObservedText::new("");
        value.set("published before subscribe");

        let rx = value.subscribe();
        assert_eq!(rx.borrow().as_ref(), "published before subscribe");
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_multiple_subscribers_notified() {
        let value = ObservedText::new("");
        let mut a = value.subscribe();
        let mut b = value.subscribe();

        value.set("x");
        assert!(a.has_changed().unwrap());
        assert!(b.has_changed().unwrap());
    }

    #[test]
    fn test_builtin_names_registered() {
        let publication = Publication::new();
        assert!(publication.value(STYLESHEET).is_some());
        assert!(publication.value(LIVE_PREVIEW_CONTENT).is_some());
        assert!(publication.value("nosuch").is_none());
    }

    #[test]
    fn test_publish_count_tracks_effective_sets_only() {
        let publication = Publication::new();
        assert_eq!(publication.publish_count(), 0);

        assert!(publication.set_content("<p>a</p>"));
        assert!(!publication.set_content("<p>a</p>"));
        assert!(publication.set_stylesheet("body {}"));
        assert_eq!(publication.publish_count(), 2);
    }

    #[test]
    fn test_unknown_name_is_ignored() {
        let publication = Publication::new();
        assert!(!publication.set("nosuch", "value"));
        assert_eq!(publication.publish_count(), 0);
    }

    #[test]
    fn test_registered_value_is_observable() {
        let mut publication = Publication::new();
        publication.register("wordcount");
        assert!(publication.set("wordcount", "42"));
        assert_eq!(publication.value("wordcount").unwrap().text().as_ref(), "42");
    }
}
