//! Divergence Anchoring - Line-Level Diff for Scroll Preservation
//!
//! Pure function over the previous and current rendered markup: finds the
//! first line where the two differ and inserts a scroll anchor there, so the
//! display surface can bring the edited location back into view after a
//! re-render.
//!
//! This is a single forward scan, not a general diff. Only the position of
//! the earliest change matters for scrolling, so no edit script is computed
//! and later divergences are ignored.

/// Element id of the scroll anchor.
pub const MODIFY_POINT_ID: &str = "livepreviewmodifypoint";

/// The anchor markup inserted at the first divergence.
pub const MODIFY_POINT_ANCHOR: &str = "<a id=\"livepreviewmodifypoint\"></a>";

/// Result of the divergence scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchoredMarkup {
    /// The new markup with the scroll anchor inserted at the first
    /// divergence. Unanchored when `changed` is false.
    pub markup: String,
    /// False when the two renders are line-identical; no publish should
    /// happen in that case.
    pub changed: bool,
}

/// Insert a scroll anchor into `new` at the first line that differs from
/// `old`.
///
/// Both inputs are treated as ordered sequences of lines. Lines equal in
/// both are copied through; at the first differing pair the anchor is
/// inserted and every remaining line of `new` is copied verbatim. When `old`
/// is a strict prefix of `new` the anchor lands right before the first
/// appended line. When `new` is a strict prefix of `old` the anchor is still
/// appended at the truncation point, with nothing after it - the surface
/// scrolls to the end of the remaining content.
pub fn anchor_first_divergence(old: &str, new: &str) -> AnchoredMarkup {
    let mut old_lines = old.lines();
    let mut new_lines = new.lines();

    let mut markup = String::with_capacity(new.len() + MODIFY_POINT_ANCHOR.len());
    let mut changed = false;

    let mut old_line = old_lines.next();
    let mut new_line = new_lines.next();

    while let (Some(o), Some(n)) = (old_line, new_line) {
        if o != n {
            changed = true;
            markup.push_str(MODIFY_POINT_ANCHOR);
            break;
        }
        markup.push_str(n);
        markup.push('\n');
        old_line = old_lines.next();
        new_line = new_lines.next();
    }

    // Lines removed at the end: the anchor still goes in, at the truncation
    // point, even though no new content follows it.
    if !changed && old_line.is_some() && new_line.is_none() {
        changed = true;
        markup.push_str(MODIFY_POINT_ANCHOR);
    }

    // Copy the remaining new lines. If no divergence was found yet, the
    // remaining lines are appended content and the anchor goes before the
    // first of them.
    while let Some(n) = new_line {
        if !changed {
            changed = true;
            markup.push_str(MODIFY_POINT_ANCHOR);
        }
        markup.push_str(n);
        markup.push('\n');
        new_line = new_lines.next();
    }

    AnchoredMarkup { markup, changed }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(lines: &[&str]) -> String {
        let mut out = String::new();
        for line in lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_append_anchors_before_first_new_line() {
        let old = joined(&["a", "b"]);
        let new = joined(&["a", "b", "c"]);
        let result = anchor_first_divergence(&old, &new);
        assert!(result.changed);
        assert_eq!(
            result.markup,
            format!("a\nb\n{MODIFY_POINT_ANCHOR}c\n")
        );
    }

    #[test]
    fn test_truncation_anchors_at_cut_point() {
        let old = joined(&["a", "b", "c"]);
        let new = joined(&["a", "b"]);
        let result = anchor_first_divergence(&old, &new);
        assert!(result.changed);
        assert_eq!(result.markup, format!("a\nb\n{MODIFY_POINT_ANCHOR}"));
    }

    #[test]
    fn test_identical_input_reports_unchanged() {
        let text = joined(&["a", "b", "c"]);
        let result = anchor_first_divergence(&text, &text);
        assert!(!result.changed);
        assert!(!result.markup.contains(MODIFY_POINT_ANCHOR));
    }

    #[test]
    fn test_middle_edit_copies_trailing_lines_verbatim() {
        let old = joined(&["a", "b", "c"]);
        let new = joined(&["a", "X", "c"]);
        let result = anchor_first_divergence(&old, &new);
        assert!(result.changed);
        assert_eq!(
            result.markup,
            format!("a\n{MODIFY_POINT_ANCHOR}X\nc\n")
        );
    }

    #[test]
    fn test_only_first_divergence_is_anchored() {
        let old = joined(&["a", "b", "c", "d"]);
        let new = joined(&["a", "X", "c", "Y"]);
        let result = anchor_first_divergence(&old, &new);
        assert_eq!(result.markup.matches(MODIFY_POINT_ANCHOR).count(), 1);
        assert_eq!(
            result.markup,
            format!("a\n{MODIFY_POINT_ANCHOR}X\nc\nY\n")
        );
    }

    #[test]
    fn test_empty_previous_render_anchors_at_top() {
        let new = joined(&["a", "b"]);
        let result = anchor_first_divergence("", &new);
        assert!(result.changed);
        assert_eq!(result.markup, format!("{MODIFY_POINT_ANCHOR}a\nb\n"));
    }

    #[test]
    fn test_empty_both_is_unchanged() {
        let result = anchor_first_divergence("", "");
        assert!(!result.changed);
        assert!(result.markup.is_empty());
    }

    #[test]
    fn test_cleared_render_anchors_with_no_content() {
        let old = joined(&["a", "b"]);
        let result = anchor_first_divergence(&old, "");
        assert!(result.changed);
        assert_eq!(result.markup, MODIFY_POINT_ANCHOR);
    }
}
