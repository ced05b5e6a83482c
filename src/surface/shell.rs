//! Static shell markup.
//!
//! The shell is loaded once per base-location change; live content is then
//! pushed into it through the publication channels without a page reload.
//! Its embedded bootstrap script wires both named values into the page:
//! each is applied immediately on connect (late join) and re-applied on
//! every change notification.

/// Id of the element live content is injected into.
pub const PLACEHOLDER_ID: &str = "livepreviewplaceholder";

/// Build the static shell markup.
///
/// `math_script_url` points at the math typesetting bundle; everything else
/// is fixed. `previewChannel`, `loadStyleSheet` and `updateText` are
/// provided by the surface's script environment.
pub fn shell_html(math_script_url: &str) -> String {
    format!(
        "<!doctype html>\
         <html lang=\"en\">\
         <meta charset=\"utf-8\">\
         <head>\
         <script>\
         MathJax = {{\
             tex: {{\
                 inlineMath: [['$', '$']]\
             }}\
         }};\
         </script>\
         <script type=\"text/javascript\" id=\"MathJax-script\" src=\"{math_script_url}\"></script>\
         <style id=\"livepreview_css\" type=\"text/css\" media=\"all\"></style>\
         </head>\
         <body>\
         <div id=\"{PLACEHOLDER_ID}\"></div>\
         <script>\
         previewChannel.connect(function(channel) {{\
             var styleSheet = channel.values.stylesheet;\
             loadStyleSheet(styleSheet.text);\
             styleSheet.textChanged.connect(loadStyleSheet);\
             \
             var content = channel.values.livepreviewcontent;\
             updateText(content.text);\
             content.textChanged.connect(updateText);\
         }});\
         </script>\
         </body>\
         </html>"
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publish::{LIVE_PREVIEW_CONTENT, STYLESHEET};

    #[test]
    fn test_shell_embeds_math_script_url() {
        let shell = shell_html("https://example.test/mathjax.js");
        assert!(shell.contains("src=\"https://example.test/mathjax.js\""));
    }

    #[test]
    fn test_shell_has_placeholder_and_channel_wiring() {
        let shell = shell_html("https://example.test/mathjax.js");
        assert!(shell.contains(PLACEHOLDER_ID));
        assert!(shell.contains(STYLESHEET));
        assert!(shell.contains(LIVE_PREVIEW_CONTENT));
    }
}
