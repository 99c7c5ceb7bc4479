//! Markdown rendering for ad copy
//!
//! Generated ad text arrives as markdown. It is rendered to HTML with the
//! table and strikethrough extensions enabled, then injected into the slot
//! via `dangerous_inner_html`.

use pulldown_cmark::{html, Options, Parser};

/// Render markdown ad copy to an HTML fragment.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
