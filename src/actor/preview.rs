//! Preview Actor - Update Coordination
//!
//! Owns the coordinator state and runs the refresh decision table:
//!
//! ```text
//! edits --Refresh--> PreviewActor --spawn_blocking--> Renderer
//!                        ^                               |
//!                        +----------RenderReady----------+
//!                        |
//!                 divergence anchor -> Publication -> surface
//! ```
//!
//! All state mutation happens on the actor task; only the render itself
//! runs on the worker pool, and its completion is marshaled back as a
//! message. Renders are single-flight: overlapping update requests collapse
//! into one follow-up render after the current one finishes.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, ensure};
use tokio::sync::{mpsc, oneshot, watch};

use super::handle::PreviewHandle;
use super::messages::PreviewMsg;
use crate::config::PreviewConfig;
use crate::diff;
use crate::document::Document;
use crate::publish::Publication;
use crate::render::{self, RenderError, Renderer};
use crate::surface::{BaseLocation, DisplaySurface, command};
use crate::{debug, log};

/// Update coordination state.
///
/// `render_requested_again` may only be set while `render_in_flight` is
/// true; both are cleared when the completed render is processed.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct CoordinatorState {
    pub(super) render_in_flight: bool,
    pub(super) render_requested_again: bool,
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for a preview pipeline instance.
pub struct PreviewBuilder {
    document: Arc<dyn Document>,
    surface: Arc<dyn DisplaySurface>,
    renderer: Option<Arc<dyn Renderer>>,
    config: PreviewConfig,
}

impl PreviewBuilder {
    pub fn new(document: Arc<dyn Document>, surface: Arc<dyn DisplaySurface>) -> Self {
        Self {
            document,
            surface,
            renderer: None,
            config: PreviewConfig::default(),
        }
    }

    /// Set the initial renderer. Without one, update requests are skipped
    /// until a renderer is configured through the handle.
    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_config(mut self, config: PreviewConfig) -> Self {
        self.config = config;
        self
    }

    /// Spawn the preview actor on the current tokio runtime.
    ///
    /// Loads the shell for the document's current path and requests an
    /// initial update before processing messages.
    pub fn spawn(self) -> Result<PreviewHandle> {
        ensure!(
            self.config.channel_capacity > 0,
            "preview channel capacity must be non-zero"
        );

        if self.config.verbose {
            crate::logger::set_verbose(true);
        }

        let (tx, rx) = mpsc::channel(self.config.channel_capacity);
        let publication = Arc::new(Publication::new());
        let path_rx = self.document.path_changes();

        let actor = PreviewActor {
            rx,
            tx: tx.downgrade(),
            document: self.document,
            surface: self.surface,
            publication: Arc::clone(&publication),
            renderer: self.renderer,
            path_rx,
            watching_path: true,
            state: CoordinatorState::default(),
            visible: self.config.visible,
            vanilla_markup: String::new(),
            shutdown_ack: None,
        };
        tokio::spawn(actor.run());

        Ok(PreviewHandle::new(tx, publication))
    }
}

// =============================================================================
// Actor
// =============================================================================

pub(super) struct PreviewActor {
    rx: mpsc::Receiver<PreviewMsg>,
    /// Upgraded and cloned into render workers so completions come back as
    /// messages. Weak, so the actor stops once every handle is dropped.
    tx: mpsc::WeakSender<PreviewMsg>,
    document: Arc<dyn Document>,
    surface: Arc<dyn DisplaySurface>,
    publication: Arc<Publication>,
    renderer: Option<Arc<dyn Renderer>>,
    path_rx: watch::Receiver<Option<PathBuf>>,
    watching_path: bool,
    state: CoordinatorState,
    visible: bool,
    /// Last unmodified render, kept only for diffing the next one.
    vanilla_markup: String,
    /// Set while draining for shutdown.
    shutdown_ack: Option<oneshot::Sender<()>>,
}

impl PreviewActor {
    /// Run the actor event loop.
    pub(super) async fn run(mut self) {
        // A fresh preview behaves like a path change: load the shell, then
        // request the first update.
        self.reload_shell();

        loop {
            tokio::select! {
                maybe = self.rx.recv() => {
                    let Some(msg) = maybe else { break };
                    if self.dispatch(msg) {
                        break;
                    }
                }
                changed = self.path_rx.changed(), if self.watching_path => {
                    match changed {
                        Ok(()) => self.reload_shell(),
                        Err(_) => self.watching_path = false,
                    }
                }
            }
        }

        debug!("preview"; "actor stopped");
    }

    /// Dispatch one message. Returns true when the actor should stop.
    fn dispatch(&mut self, msg: PreviewMsg) -> bool {
        match msg {
            PreviewMsg::Refresh => self.refresh(),

            PreviewMsg::RenderReady(result) => {
                self.on_render_ready(result);
                return self.finish_if_draining();
            }

            PreviewMsg::SetStyleSheet(css) => {
                self.publication.set_stylesheet(&css);
            }

            PreviewMsg::SetRenderer(renderer) => self.set_renderer(renderer),

            PreviewMsg::SetVisible(visible) => self.set_visible(visible),

            PreviewMsg::NavigateToHeading(ordinal) => {
                self.surface.run_command(&command::scroll_to_heading(ordinal));
            }

            PreviewMsg::SurfaceReady(ok) => self.on_surface_ready(ok),

            PreviewMsg::Closed => self.reset_content(),

            PreviewMsg::Shutdown(ack) => {
                if !self.state.render_in_flight {
                    let _ = ack.send(());
                    return true;
                }
                debug!("preview"; "draining in-flight render before shutdown");
                self.shutdown_ack = Some(ack);
            }
        }
        false
    }

    // =========================================================================
    // Update decision table
    // =========================================================================

    /// Decide whether to render now.
    ///
    /// Order matters: the coalescing check comes first so that overlapping
    /// requests never dispatch a second render, then visibility defers work
    /// until the preview is shown.
    fn refresh(&mut self) {
        if self.state.render_in_flight {
            self.state.render_requested_again = true;
            return;
        }

        if !self.visible {
            return;
        }

        // Some renderers misbehave on empty input, so it never reaches them.
        if self.document.is_empty() {
            self.reset_content();
            return;
        }

        let Some(renderer) = self.renderer.clone() else {
            debug!("preview"; "no renderer configured, skipping update");
            return;
        };

        let text = self.document.text();
        if text.is_empty() {
            return;
        }

        // No live handle means nobody can observe the result; the actor is
        // about to stop anyway.
        let Some(tx) = self.tx.upgrade() else {
            return;
        };

        self.state.render_in_flight = true;
        tokio::task::spawn_blocking(move || {
            let result = render::render_for_preview(renderer.as_ref(), &text);
            let _ = tx.blocking_send(PreviewMsg::RenderReady(result));
        });
    }

    /// Completion of an asynchronous render, back on the actor task.
    fn on_render_ready(&mut self, result: Result<String, RenderError>) {
        match result {
            Ok(markup) => {
                let anchored = diff::anchor_first_divergence(&self.vanilla_markup, &markup);
                if anchored.changed {
                    self.publication.set_content(&anchored.markup);
                    self.vanilla_markup = markup;
                }
            }
            Err(e) => {
                log!("render"; "preview render failed: {e}");
            }
        }

        self.state.render_in_flight = false;

        if self.state.render_requested_again {
            self.state.render_requested_again = false;
            if self.shutdown_ack.is_none() {
                self.refresh();
            }
        }
    }

    fn finish_if_draining(&mut self) -> bool {
        if self.state.render_in_flight {
            return false;
        }
        if let Some(ack) = self.shutdown_ack.take() {
            let _ = ack.send(());
            return true;
        }
        false
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    /// Publish empty content and drop the diff baseline.
    fn reset_content(&mut self) {
        self.vanilla_markup.clear();
        self.publication.set_content("");
    }

    /// Swap the active renderer.
    ///
    /// The old renderer's output is no longer a valid comparison baseline,
    /// so the next render publishes in full.
    fn set_renderer(&mut self, renderer: Option<Arc<dyn Renderer>>) {
        self.renderer = renderer;
        self.reset_content();
        self.refresh();
    }

    fn set_visible(&mut self, visible: bool) {
        let was_visible = self.visible;
        self.visible = visible;
        if visible && !was_visible {
            self.refresh();
        }
    }

    fn on_surface_ready(&mut self, ok: bool) {
        if ok {
            self.surface.run_command(command::disable_editing());
        } else {
            log!("surface"; "shell load failed; rendered view stays editable");
        }
    }

    /// Recompute the base location, reload the shell, then refresh.
    ///
    /// The only path that reinitializes the surface; every other update is
    /// an in-place content push.
    fn reload_shell(&mut self) {
        let path = self.document.file_path();
        let base = BaseLocation::for_document(path.as_deref());
        debug!("surface"; "loading shell, base location: {:?}", base.as_str());
        self.surface.load_shell(&base);
        self.refresh();
    }
}
