#![deny(missing_docs)]

//! # Markdown Rendering
//!
//! Operation descriptions are Markdown; javadoc wants HTML.

use pulldown_cmark::{html, Parser};

/// Converts Markdown text into HTML.
pub trait MarkdownRenderer {
    /// Renders `markdown` as an HTML fragment.
    fn render(&self, markdown: &str) -> String;
}

/// CommonMark renderer backed by `pulldown-cmark`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonMarkRenderer;

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new(markdown);
        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_paragraph_and_emphasis() {
        let html = CommonMarkRenderer.render("Returns a *single* pet");
        assert_eq!(html, "<p>Returns a <em>single</em> pet</p>\n");
    }

    #[test]
    fn test_renders_lists() {
        let html = CommonMarkRenderer.render("- a\n- b\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>a</li>"));
    }
}
