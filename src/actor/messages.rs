//! Preview Actor Messages
//!
//! Everything that can happen to a preview instance arrives as one of these
//! messages, so coordinator state is only ever touched on the actor task.

use std::sync::Arc;

use tokio::sync::oneshot;

use crate::render::{RenderError, Renderer};

/// Messages to the preview actor.
pub enum PreviewMsg {
    /// An update is desired now. Carries no payload; the actor snapshots
    /// the document when it decides to render.
    Refresh,

    /// A render finished on the worker pool.
    RenderReady(Result<String, RenderError>),

    /// Replace the stylesheet published to the surface.
    SetStyleSheet(String),

    /// Swap the active renderer (`None` = unconfigured, updates are
    /// skipped). Swapping forces a fresh full publish.
    SetRenderer(Option<Arc<dyn Renderer>>),

    /// Show or hide the preview. Becoming visible runs any deferred update.
    SetVisible(bool),

    /// Scroll the view to the Nth heading anchor.
    NavigateToHeading(u32),

    /// The surface finished loading the shell. On success the rendered
    /// view's in-place editing is disabled.
    SurfaceReady(bool),

    /// The previewed document was closed; published content is reset.
    Closed,

    /// Drain and stop: wait for any in-flight render, then acknowledge.
    Shutdown(oneshot::Sender<()>),
}
