//! Veduta - live-preview pipeline for text editors.
//!
//! Converts an editable document's plain text into rendered markup off the
//! interactive thread, publishes the result to a display surface, and
//! preserves the reader's place across edits by anchoring the first point
//! of divergence between consecutive renders.
//!
//! # Architecture
//!
//! ```text
//! edits --> PreviewHandle --> PreviewActor --> Renderer (worker pool)
//!                                 |
//!                      first-divergence anchor
//!                                 |
//!                           Publication --> display surface
//! ```
//!
//! The preview actor is the single control context: coordinator state and
//! published content are only ever touched there. Renders are single-flight
//! per preview instance; update requests arriving while one is in flight
//! coalesce into exactly one follow-up render.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use veduta::{MarkdownRenderer, PreviewBuilder, TextDocument};
//! # use veduta::{BaseLocation, DisplaySurface};
//! # struct Webview;
//! # impl DisplaySurface for Webview {
//! #     fn load_shell(&self, _base: &BaseLocation) {}
//! #     fn run_command(&self, _command: &str) {}
//! # }
//!
//! # async fn example() -> anyhow::Result<()> {
//! let document = Arc::new(TextDocument::with_text("# Draft\n"));
//! let handle = PreviewBuilder::new(document.clone(), Arc::new(Webview))
//!     .with_renderer(Arc::new(MarkdownRenderer::new()))
//!     .spawn()?;
//!
//! document.set_text("# Draft\n\nMore text.\n");
//! handle.request_update().await;
//! # Ok(())
//! # }
//! ```

pub mod actor;
pub mod config;
pub mod diff;
pub mod document;
pub mod logger;
pub mod publish;
pub mod render;
pub mod surface;

pub use actor::{PreviewBuilder, PreviewHandle, PreviewMsg};
pub use config::{ConfigError, PreviewConfig};
pub use diff::{AnchoredMarkup, MODIFY_POINT_ANCHOR, anchor_first_divergence};
pub use document::{Document, SharedDocument, TextDocument};
pub use publish::{LIVE_PREVIEW_CONTENT, ObservedText, Publication, STYLESHEET};
pub use render::{
    HEADING_ANCHOR_PREFIX, MarkdownOptions, MarkdownRenderer, RenderError, Renderer,
    render_for_preview,
};
pub use surface::{BaseLocation, DisplaySurface, PLACEHOLDER_ID, shell_html};
