//! Rendering Collaborators
//!
//! The preview consumes a text-to-markup renderer through the [`Renderer`]
//! trait. The renderer is swappable at runtime; swapping it invalidates the
//! diff baseline and forces a full re-publish.
//!
//! # Module Structure
//!
//! - `adapter` - worker-side invocation with the preview typography override
//! - `markdown` - default pulldown-cmark implementation

mod adapter;
mod markdown;

pub use adapter::render_for_preview;
pub use markdown::{HEADING_ANCHOR_PREFIX, MarkdownOptions, MarkdownRenderer};

use thiserror::Error;

/// Failure surfaced by a renderer.
///
/// Renderer faults are treated as transient: the preview publishes nothing
/// for the failed cycle and the next edit retries naturally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The renderer rejected its input.
    #[error("renderer failed: {0}")]
    Failed(String),

    /// The renderer panicked on the worker pool. Converted into a sentinel
    /// at the async boundary so a completion is always delivered and the
    /// in-flight state cannot leak.
    #[error("renderer panicked")]
    Panicked,
}

/// A text-to-markup renderer.
///
/// Implementations are shared with the render worker pool, so the smart
/// typography toggle takes `&self` and must be interior-mutable. The
/// persisted value of the toggle belongs to the user (it is an export
/// preference); previews force it on only for the duration of a render.
pub trait Renderer: Send + Sync {
    /// Current smart typography setting.
    fn smart_typography(&self) -> bool;

    /// Change the smart typography setting.
    fn set_smart_typography(&self, enabled: bool);

    /// Render the full document text into display markup.
    fn render(&self, text: &str) -> Result<String, RenderError>;
}
