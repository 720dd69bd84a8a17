//! Markdown rendering and text escaping.

use pulldown_cmark::{Options, Parser};

// ============================================================================
// Text Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ============================================================================
// Markdown Rendering
// ============================================================================

pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);
    // Raw HTML in the source passes through pulldown-cmark untouched
    ammonia::clean(&html_output)
}

/// Turn submitted text into stored note content.
///
/// Returns `None` when nothing visible is left: blank input, or input the
/// sanitizer strips entirely (a lone `<script>` block, an HTML comment).
/// Rendering is one-way: the output is HTML and is never fed back through
/// the renderer.
pub fn prepare_content(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let rendered = render_markdown(trimmed);
    if rendered.trim().is_empty() {
        return None;
    }
    Some(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis() {
        let html = render_markdown("hello *world*");
        assert!(html.contains("hello <em>world</em>"));
    }

    #[test]
    fn test_bold_link_and_code() {
        let html = render_markdown("**bold** [site](https://example.com) `x < y`");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("href=\"https://example.com\""));
        assert!(html.contains("<code>x &lt; y</code>"));
    }

    #[test]
    fn test_image_reference_survives_sanitizing() {
        let html = render_markdown("look ![](/uploads/abc.png)");
        assert!(html.contains("<img src=\"/uploads/abc.png\""));
    }

    #[test]
    fn test_raw_script_is_stripped() {
        let html = render_markdown("hi <script>alert(1)</script>");
        assert!(!html.contains("<script"));
        assert!(html.contains("hi"));
    }

    #[test]
    fn test_strikethrough() {
        let html = render_markdown("~~gone~~");
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_prepare_content_skips_blank() {
        assert_eq!(prepare_content(""), None);
        assert_eq!(prepare_content("   \n\t  "), None);
    }

    #[test]
    fn test_prepare_content_skips_sanitized_to_nothing() {
        assert_eq!(prepare_content("<script>alert(1)</script>"), None);
        assert_eq!(prepare_content("<!-- hidden -->"), None);
        assert_eq!(prepare_content("  <style>p { color: red }</style>\n"), None);
    }

    #[test]
    fn test_prepare_content_keeps_text_around_stripped_html() {
        let html = prepare_content("kept <script>alert(1)</script>").unwrap();
        assert!(html.contains("kept"));
        assert!(!html.contains("script"));
    }

    #[test]
    fn test_prepare_content_trims_before_rendering() {
        let html = prepare_content("   # Title   \n").unwrap();
        assert_eq!(html.trim(), "<h1>Title</h1>");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }
}
