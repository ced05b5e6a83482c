//! Display Surface Collaborators
//!
//! The display surface renders the published markup and executes
//! scroll/navigation commands. The core drives it in exactly two ways:
//! `load_shell` when the base location changes (the only full
//! reinitialization), and `run_command` for in-view scripting; everything
//! else reaches the surface through the publication channels.
//!
//! # Module Structure
//!
//! - `base` - base location resolution from the document path
//! - `shell` - static shell markup loaded once per base-location change

mod base;
mod shell;

pub use base::BaseLocation;
pub use shell::{PLACEHOLDER_ID, shell_html};

/// A surface displaying the rendered preview.
pub trait DisplaySurface: Send + Sync {
    /// (Re)load the static shell content rooted at `base`.
    fn load_shell(&self, base: &BaseLocation);

    /// Execute a script command in the rendered view.
    fn run_command(&self, command: &str);
}

/// Script commands executed in the rendered view.
pub mod command {
    use crate::diff::MODIFY_POINT_ID;
    use crate::render::HEADING_ANCHOR_PREFIX;

    /// Scroll to the Nth heading anchor.
    pub fn scroll_to_heading(ordinal: u32) -> String {
        format!("document.getElementById('{HEADING_ANCHOR_PREFIX}{ordinal}').scrollIntoView()")
    }

    /// Scroll to the last modification point.
    pub fn scroll_to_modify_point() -> String {
        format!("document.getElementById('{MODIFY_POINT_ID}').scrollIntoView()")
    }

    /// Disable in-place editing of the rendered view.
    pub fn disable_editing() -> &'static str {
        "document.documentElement.contentEditable = false;"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::command;

    #[test]
    fn test_heading_command_embeds_ordinal() {
        let cmd = command::scroll_to_heading(4);
        assert!(cmd.contains("livepreviewhnbr4"));
        assert!(cmd.ends_with("scrollIntoView()"));
    }

    #[test]
    fn test_modify_point_command_targets_anchor() {
        assert!(command::scroll_to_modify_point().contains("livepreviewmodifypoint"));
    }
}
