//! Page — the single HTML document served at `/`.
//!
//! DESIGN
//! ======
//! Markup lives in `templates/index.html`; askama escapes every
//! interpolated value. The page is static apart from the example
//! questions and the accepted extension list, which come from `demo` so
//! the markup and the callbacks never drift apart. Buttons are wired by a
//! small inline script that posts to the two callback endpoints and writes
//! `output` into the matching read-only text area.

use askama::Template;

use crate::demo::{ACCEPTED_EXTENSIONS, EXAMPLE_QUESTIONS};

pub const TITLE: &str = "RAG-Anything: Multimodal AI Demo";

/// Technology showcase cards: (heading, blurb).
pub const STACK: [(&str, &str); 4] = [
    ("🧠 LightRAG", "Fast retrieval-augmented generation engine"),
    ("⚡ MinerU", "High-fidelity document parsing"),
    ("🔗 Knowledge Graphs", "Cross-modal relationship mapping"),
    ("🎯 Multimodal AI", "Text, images, tables, equations"),
];

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub accept: String,
    pub examples: &'a [&'a str],
    pub stack: &'a [(&'a str, &'a str)],
}

impl Default for IndexTemplate<'static> {
    fn default() -> Self {
        Self { title: TITLE, accept: ACCEPTED_EXTENSIONS.join(","), examples: &EXAMPLE_QUESTIONS, stack: &STACK }
    }
}

/// Render the complete demo page.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_page() -> Result<String, askama::Error> {
    IndexTemplate::default().render()
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
