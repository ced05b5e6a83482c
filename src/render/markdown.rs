//! Default markdown renderer built on pulldown-cmark.

use std::sync::atomic::{AtomicBool, Ordering};

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

use super::{RenderError, Renderer};

/// Id prefix for ordinal heading anchors.
///
/// The Nth heading in the document gets the id `livepreviewhnbr<N>`, which
/// the display surface uses to scroll to a heading by its position.
pub const HEADING_ANCHOR_PREFIX: &str = "livepreviewhnbr";

/// Markdown extensions enabled for preview rendering.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
}

impl MarkdownOptions {
    /// Create options with all extensions enabled
    pub fn all() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
        }
    }

    /// Convert to pulldown-cmark Options
    fn to_pulldown_options(&self, smart_typography: bool) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        if smart_typography {
            opts.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        opts
    }
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self::all()
    }
}

/// Markdown renderer with ordinal heading anchors.
///
/// Smart typography maps to pulldown-cmark's smart punctuation: straight
/// quotes, `--`/`---` and `...` become their typographic forms.
pub struct MarkdownRenderer {
    options: MarkdownOptions,
    smart_typography: AtomicBool,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::with_options(MarkdownOptions::all())
    }

    pub fn with_options(options: MarkdownOptions) -> Self {
        Self {
            options,
            smart_typography: AtomicBool::new(false),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MarkdownRenderer {
    fn smart_typography(&self) -> bool {
        self.smart_typography.load(Ordering::SeqCst)
    }

    fn set_smart_typography(&self, enabled: bool) {
        self.smart_typography.store(enabled, Ordering::SeqCst);
    }

    fn render(&self, text: &str) -> Result<String, RenderError> {
        let opts = self.options.to_pulldown_options(self.smart_typography());

        let mut next_heading = 0u32;
        let events = Parser::new_ext(text, opts).map(move |event| match event {
            Event::Start(Tag::Heading {
                level,
                classes,
                attrs,
                ..
            }) => {
                next_heading += 1;
                Event::Start(Tag::Heading {
                    level,
                    id: Some(CowStr::from(format!(
                        "{HEADING_ANCHOR_PREFIX}{next_heading}"
                    ))),
                    classes,
                    attrs,
                })
            }
            other => other,
        });

        let mut markup = String::with_capacity(text.len() * 2);
        html::push_html(&mut markup, events);
        Ok(markup)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markup() {
        let renderer = MarkdownRenderer::new();
        let markup = renderer.render("*emphasis* and `code`").unwrap();
        assert!(markup.contains("<em>emphasis</em>"));
        assert!(markup.contains("<code>code</code>"));
    }

    #[test]
    fn test_headings_get_sequential_anchor_ids() {
        let renderer = MarkdownRenderer::new();
        let markup = renderer
            .render("# First\n\ntext\n\n## Second\n\n# Third\n")
            .unwrap();
        assert!(markup.contains("<h1 id=\"livepreviewhnbr1\">"));
        assert!(markup.contains("<h2 id=\"livepreviewhnbr2\">"));
        assert!(markup.contains("<h1 id=\"livepreviewhnbr3\">"));
    }

    #[test]
    fn test_smart_typography_toggle() {
        let renderer = MarkdownRenderer::new();

        let plain = renderer.render("it's \"quoted\"").unwrap();
        assert!(plain.contains("it's"));

        renderer.set_smart_typography(true);
        let smart = renderer.render("it's \"quoted\"").unwrap();
        assert!(smart.contains('\u{2019}'), "expected curly apostrophe");
        assert!(smart.contains('\u{201C}'), "expected opening curly quote");
    }

    #[test]
    fn test_tables_extension_enabled() {
        let renderer = MarkdownRenderer::new();
        let markup = renderer
            .render("| a | b |\n|---|---|\n| 1 | 2 |\n")
            .unwrap();
        assert!(markup.contains("<table>"));
    }

    #[test]
    fn test_extensions_can_be_disabled() {
        let renderer = MarkdownRenderer::with_options(MarkdownOptions {
            tables: false,
            footnotes: false,
            strikethrough: false,
            task_lists: false,
        });
        let markup = renderer.render("~~gone~~").unwrap();
        assert!(!markup.contains("<del>"));
    }
}
