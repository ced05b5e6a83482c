//! Worker-side render invocation.
//!
//! Wraps a renderer call with the preview typography override: smart
//! typography is forced on for the render and the prior value restored
//! afterwards, so the user's persisted export preference is unaffected by
//! previewing.

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::{RenderError, Renderer};

/// Restores the saved typography setting when dropped.
struct TypographyGuard<'a> {
    renderer: &'a dyn Renderer,
    saved: bool,
}

impl Drop for TypographyGuard<'_> {
    fn drop(&mut self) {
        self.renderer.set_smart_typography(self.saved);
    }
}

/// Render `text` for preview display.
///
/// Runs on the caller's thread - the preview actor dispatches this onto the
/// blocking worker pool. Panics inside the renderer are caught and surfaced
/// as [`RenderError::Panicked`] instead of unwinding across the async
/// boundary; the typography setting is restored on every exit path.
pub fn render_for_preview(renderer: &dyn Renderer, text: &str) -> Result<String, RenderError> {
    let guard = TypographyGuard {
        renderer,
        saved: renderer.smart_typography(),
    };
    renderer.set_smart_typography(true);

    let outcome = catch_unwind(AssertUnwindSafe(|| renderer.render(text)));
    drop(guard);

    match outcome {
        Ok(result) => result,
        Err(_) => Err(RenderError::Panicked),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    /// Records the typography setting observed while rendering.
    struct ProbeRenderer {
        smart: AtomicBool,
        observed: AtomicBool,
        panic_on_render: bool,
    }

    impl ProbeRenderer {
        fn new(smart: bool, panic_on_render: bool) -> Self {
            Self {
                smart: AtomicBool::new(smart),
                observed: AtomicBool::new(false),
                panic_on_render,
            }
        }
    }

    impl Renderer for ProbeRenderer {
        fn smart_typography(&self) -> bool {
            self.smart.load(Ordering::SeqCst)
        }

        fn set_smart_typography(&self, enabled: bool) {
            self.smart.store(enabled, Ordering::SeqCst);
        }

        fn render(&self, text: &str) -> Result<String, RenderError> {
            self.observed.store(self.smart_typography(), Ordering::SeqCst);
            if self.panic_on_render {
                panic!("renderer exploded");
            }
            Ok(format!("<p>{text}</p>\n"))
        }
    }

    #[test]
    fn test_typography_forced_on_during_render() {
        let renderer = ProbeRenderer::new(false, false);
        let markup = render_for_preview(&renderer, "hi").unwrap();
        assert_eq!(markup, "<p>hi</p>\n");
        assert!(renderer.observed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_typography_restored_after_render() {
        for prior in [false, true] {
            let renderer = ProbeRenderer::new(prior, false);
            render_for_preview(&renderer, "hi").unwrap();
            assert_eq!(renderer.smart_typography(), prior);
        }
    }

    #[test]
    fn test_panic_becomes_sentinel_and_restores_typography() {
        let renderer = ProbeRenderer::new(false, true);
        let result = render_for_preview(&renderer, "hi");
        assert_eq!(result, Err(RenderError::Panicked));
        assert!(!renderer.smart_typography());
    }
}
