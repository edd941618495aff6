//! Markdown front-end.
//!
//! Markdown documents are rendered to HTML first and then converted like any
//! other fragment.

use pulldown_cmark::{html, Options, Parser};

/// Render Markdown to an HTML fragment.
pub fn markdown_to_html(source: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_fragment;

    #[test]
    fn renders_headings_and_paragraphs() {
        let html = markdown_to_html("# Hello World\n\nThis is a paragraph.");

        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a paragraph.</p>"));
    }

    #[test]
    fn renders_tables() {
        let html = markdown_to_html("| Name | Age |\n| ---- | --- |\n| John | 30 |\n");

        assert!(html.contains("<table>"));
        assert!(html.contains("<td>John</td>"));
    }

    #[test]
    fn output_parses_as_fragment() {
        let html = markdown_to_html("Intro\n\n---\n\n- one\n- two\n\n[link](https://example.com)");
        let root = parse_fragment(&html).unwrap();

        let names: Vec<_> = root.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["p", "hr", "ul", "p"]);
    }
}
