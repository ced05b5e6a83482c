//! Preview Handle - Caller-Facing API
//!
//! A cloneable handle to a running preview actor. Every method is a
//! non-blocking message send; after the actor has stopped they become
//! no-ops, matching the degrade-to-no-update failure model.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use super::messages::PreviewMsg;
use crate::publish::Publication;
use crate::render::Renderer;

/// Handle to a running preview actor.
#[derive(Clone)]
pub struct PreviewHandle {
    tx: mpsc::Sender<PreviewMsg>,
    publication: Arc<Publication>,
}

impl PreviewHandle {
    pub(super) fn new(tx: mpsc::Sender<PreviewMsg>, publication: Arc<Publication>) -> Self {
        Self { tx, publication }
    }

    /// Request a preview update.
    ///
    /// Safe to call on every keystroke: requests arriving while a render is
    /// in flight coalesce into a single follow-up render.
    pub async fn request_update(&self) {
        self.send(PreviewMsg::Refresh).await;
    }

    /// Replace the stylesheet published to the surface.
    pub async fn set_stylesheet(&self, css: impl Into<String>) {
        self.send(PreviewMsg::SetStyleSheet(css.into())).await;
    }

    /// Swap the active renderer. Forces a fresh full publish.
    pub async fn set_renderer(&self, renderer: Option<Arc<dyn Renderer>>) {
        self.send(PreviewMsg::SetRenderer(renderer)).await;
    }

    /// Show or hide the preview. Updates requested while hidden run when
    /// the preview becomes visible again.
    pub async fn set_visible(&self, visible: bool) {
        self.send(PreviewMsg::SetVisible(visible)).await;
    }

    /// Scroll the rendered view to the Nth heading.
    pub async fn navigate_to_heading(&self, ordinal: u32) {
        self.send(PreviewMsg::NavigateToHeading(ordinal)).await;
    }

    /// Report the surface's shell load outcome.
    pub async fn surface_ready(&self, ok: bool) {
        self.send(PreviewMsg::SurfaceReady(ok)).await;
    }

    /// Reset published content after the previewed document closed.
    pub async fn document_closed(&self) {
        self.send(PreviewMsg::Closed).await;
    }

    /// Stop the actor, waiting for any in-flight render to finish first.
    pub async fn shutdown(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(PreviewMsg::Shutdown(ack_tx)).await.is_ok() {
            let _ = ack_rx.await;
        }
    }

    /// The publication registry this preview publishes into.
    pub fn publication(&self) -> &Arc<Publication> {
        &self.publication
    }

    async fn send(&self, msg: PreviewMsg) {
        let _ = self.tx.send(msg).await;
    }
}
